//! Integration tests for the outline-inference pipeline.
//!
//! These tests drive the complete engine on synthetic fragment streams
//! simulating realistic documents: title pages, tables of contents with dot
//! leaders, numbered sections across pages, form documents and non-Latin
//! scripts.

use outline_oxide::{HeadingLevel, Language, Page, TextFragment, detect_outline};

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

/// Create a fragment at a vertical position with a given font size.
fn frag(content: &str, y: f32, size: f32) -> TextFragment {
    TextFragment::new(content, [size, 0.0, 0.0, size, 72.0, y])
}

/// A paragraph block of body text lines walking down the page.
fn paragraph(lines: &[&str], top_y: f32, size: f32) -> Vec<TextFragment> {
    lines
        .iter()
        .enumerate()
        .map(|(i, text)| frag(text, top_y - 14.0 * i as f32, size))
        .collect()
}

fn page(number: u32, fragments: Vec<TextFragment>) -> Page {
    Page { number, fragments }
}

// ============================================================================
// Full-Document Scenarios
// ============================================================================

#[test]
fn test_handbook_document_end_to_end() {
    let mut page1 = vec![
        frag("Software Testing", 760.0, 24.0),
        frag("Qualification Handbook", 736.0, 24.0),
    ];
    page1.extend(paragraph(
        &[
            "Testing qualifications are described in the sections below.",
            "Each section lists the requirements for one qualification.",
            "Candidates should read every section before registering.",
        ],
        680.0,
        11.0,
    ));

    let page2 = vec![
        frag("Table of Contents", 740.0, 16.0),
        frag("1. Introduction ........................ 4", 710.0, 11.0),
        frag("2. Test Strategy ....................... 9", 696.0, 11.0),
        frag("www.example.com/testing", 640.0, 11.0),
        frag("0.1 12 JUN initial draft", 620.0, 11.0),
        frag("Version Date Remarks", 606.0, 11.0),
    ];

    let mut page3 = vec![frag("1. Introduction", 740.0, 16.0)];
    page3.extend(paragraph(
        &[
            "This handbook covers the foundation level of the scheme.",
            "It applies to software testing roles of every kind.",
        ],
        700.0,
        11.0,
    ));

    let mut page4 = vec![
        frag("2. Test Strategy", 740.0, 16.0),
        frag("2.1 Unit Testing Requirements", 700.0, 14.0),
    ];
    page4.extend(paragraph(
        &["Strategies are evaluated against the criteria stated here."],
        660.0,
        11.0,
    ));

    let result = detect_outline(&[
        page(1, page1),
        page(2, page2),
        page(3, page3),
        page(4, page4),
    ]);

    assert_eq!(result.title, "Software Testing Qualification Handbook");
    assert_eq!(result.language, Language::En);

    let entries: Vec<_> = result
        .outline
        .iter()
        .map(|e| (e.level, e.text.as_str(), e.page))
        .collect();
    assert_eq!(
        entries,
        vec![
            (HeadingLevel::H1, "Table of Contents", 1),
            (HeadingLevel::H1, "1. Introduction", 2),
            (HeadingLevel::H1, "2. Test Strategy", 3),
            (HeadingLevel::H2, "2.1 Unit Testing Requirements", 3),
        ]
    );
}

#[test]
fn test_form_document_yields_empty_outline() {
    let fragments = vec![
        frag("Application for Leave Travel Concession", 760.0, 18.0),
        frag("1. Name of the employee", 720.0, 11.0),
        frag("2. Date of joining the service", 700.0, 11.0),
        frag("3. Home Town as recorded", 680.0, 11.0),
        frag("2023", 660.0, 11.0),
        frag("Signature of the applicant", 640.0, 11.0),
    ];
    let result = detect_outline(&[page(1, fragments)]);

    // A form has no structure to find; that is a valid outcome, not an
    // error, and the title and language still come back.
    assert!(result.outline.is_empty());
    assert_eq!(result.title, "Application for Leave Travel Concession");
    assert_eq!(result.language, Language::En);
}

#[test]
fn test_flat_single_size_document_yields_empty_outline() {
    let pages = vec![
        page(
            1,
            paragraph(
                &[
                    "Quarterly planning notes for the whole working group.",
                    "Attendance was higher than in the previous quarter.",
                ],
                740.0,
                12.0,
            ),
        ),
        page(
            3,
            paragraph(
                &["Minutes were approved without further discussion."],
                740.0,
                12.0,
            ),
        ),
    ];
    let result = detect_outline(&pages);

    // Nothing exceeds the body size and nothing is numbered: no headings,
    // but the first-page top-tier lines still form a title.
    assert!(result.outline.is_empty());
    assert!(!result.title.is_empty());
}

#[test]
fn test_russian_document_with_numbered_heading() {
    // Pure-Cyrillic lines carry no ASCII alphanumerics and are classified
    // as junk; Cyrillic headings and titles survive through their digits.
    let mut page1 = vec![frag("Исследование Систем 2024", 760.0, 20.0)];
    page1.extend(paragraph(
        &[
            "Обычный текст продолжается здесь и дальше",
            "Ещё одна строка обычного текста документа",
        ],
        700.0,
        10.0,
    ));
    let page3 = vec![frag("1. Введение", 740.0, 14.0)];

    let result = detect_outline(&[page(1, page1), page(3, page3)]);

    assert_eq!(result.language, Language::Ru);
    assert_eq!(result.title, "Исследование Систем 2024");
    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
    assert_eq!(result.outline[0].text, "1. Введение");
    assert_eq!(result.outline[0].page, 2);
}

#[test]
fn test_repeated_heading_on_different_pages_is_kept() {
    let mut page1 = vec![frag("Longitudinal Study Report", 760.0, 22.0)];
    page1.extend(paragraph(
        &["Observations were recorded across repeated sessions."],
        700.0,
        10.0,
    ));
    let pages = vec![
        page(1, page1),
        page(3, vec![frag("2.1 Methods Overview", 740.0, 14.0)]),
        page(4, vec![frag("2.1 Methods Overview", 740.0, 14.0)]),
    ];
    let result = detect_outline(&pages);

    // Deduplication is keyed on (text, page): the same heading on two
    // pages is two entries.
    assert_eq!(result.outline.len(), 2);
    assert_eq!(result.outline[0].page, 2);
    assert_eq!(result.outline[1].page, 3);
}

#[test]
fn test_wrapped_body_text_is_not_a_heading() {
    let mut page1 = vec![frag("Field Manual For Operators", 760.0, 22.0)];
    page1.extend(paragraph(
        &["Operating procedures are described in order of frequency."],
        700.0,
        10.0,
    ));
    let page3 = vec![
        frag("3. Operating Procedures", 740.0, 14.0),
        frag("and the results were consistent with", 700.0, 14.0),
        frag("expectations recorded in earlier runs", 686.0, 14.0),
    ];
    let result = detect_outline(&[page(1, page1), page(3, page3)]);

    let texts: Vec<_> = result.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["3. Operating Procedures"]);
}

// ============================================================================
// Structural Invariants
// ============================================================================

#[test]
fn test_outline_page_ordering_and_uniqueness() {
    let mut page1 = vec![frag("Conference Proceedings Digest", 760.0, 22.0)];
    page1.extend(paragraph(
        &["Contributions are ordered by session and by track."],
        700.0,
        10.0,
    ));
    let pages = vec![
        page(1, page1),
        page(
            2,
            vec![
                frag("1. Opening Remarks", 740.0, 14.0),
                frag("2. Keynote Address", 700.0, 14.0),
            ],
        ),
        page(
            3,
            vec![
                frag("3. Session Reports", 740.0, 14.0),
                frag("3. Session Reports", 700.0, 14.0),
            ],
        ),
    ];
    let result = detect_outline(&pages);

    // Non-decreasing page order.
    assert!(result.outline.windows(2).all(|w| w[0].page <= w[1].page));

    // No duplicate (text, page) pairs.
    let mut seen = std::collections::HashSet::new();
    assert!(result
        .outline
        .iter()
        .all(|e| seen.insert((e.text.clone(), e.page))));

    // Every emitted heading survives the final filter.
    assert!(result.outline.iter().all(|e| e.text.chars().count() > 3));
}
