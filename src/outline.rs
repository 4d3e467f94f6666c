//! The outline-inference engine.
//!
//! Ties the pipeline together: build lines, detect the script family,
//! estimate font tiers, then run every line through the noise battery, the
//! heading splitter and the level assigner, extract the title from the
//! first pages' top-tier lines, and assemble the deduplicated, page-ordered
//! outline.
//!
//! The engine is a pure function of its input. It never fails: zero pages,
//! empty pages, or a document with no heading-like content all produce a
//! valid (possibly empty) result.

use crate::filters;
use crate::fragment::Page;
use crate::language::{
    self, HeadingPatterns, Language, SAMPLE_LINE_COUNT, is_recognized_script_char,
};
use crate::layout::font_tiers::FontTiers;
use crate::layout::line_builder::{Line, build_lines};
use crate::splitter::{normalize_heading, split_concatenated_headings};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Title lines are only drawn from this many leading pages.
const TITLE_PAGE_LIMIT: u32 = 2;

/// Length bounds for font-tier fallback candidates.
const FALLBACK_MIN_LEN: usize = 5;
const FALLBACK_MAX_LEN: usize = 100;

/// Heading hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level section heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
}

/// A single inferred heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Hierarchy level of this heading.
    pub level: HeadingLevel,

    /// Normalized heading text.
    pub text: String,

    /// Zero-based page index the heading appears on.
    pub page: usize,
}

/// The inferred document structure: title, ordered outline, language.
///
/// Built once per document; the outline is sorted by ascending page with
/// discovery order preserved within a page, and no two entries share a
/// `(text, page)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Inferred document title; empty when the first pages carry nothing
    /// title-like.
    pub title: String,

    /// Inferred headings in reading order.
    pub outline: Vec<OutlineEntry>,

    /// Detected script family of the document.
    pub language: Language,
}

/// Infer a document's title and heading outline from its fragment stream.
///
/// # Examples
///
/// ```
/// use outline_oxide::{detect_outline, HeadingLevel, Page, TextFragment};
///
/// let pages = vec![Page {
///     number: 1,
///     fragments: vec![
///         TextFragment::new("Network Protocol Reference", [20.0, 0.0, 0.0, 20.0, 72.0, 740.0]),
///         TextFragment::new("2.1 Background", [14.0, 0.0, 0.0, 14.0, 72.0, 700.0]),
///     ],
/// }];
///
/// let result = detect_outline(&pages);
/// assert_eq!(result.title, "Network Protocol Reference");
/// assert_eq!(result.outline[0].level, HeadingLevel::H2);
/// ```
pub fn detect_outline(pages: &[Page]) -> OutlineResult {
    let lines = build_lines(pages);

    let sample = lines
        .iter()
        .take(SAMPLE_LINE_COUNT)
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let language = language::detect_language(&sample);
    let patterns = HeadingPatterns::for_language(language);

    let tiers = FontTiers::estimate(&lines);

    let (title, title_keys) = extract_title(&lines, &tiers, patterns);

    let mut outline = Vec::new();
    for line in &lines {
        if is_rejected_line(line, &title_keys) {
            continue;
        }
        for candidate in split_concatenated_headings(&line.text) {
            let candidate = candidate.trim();
            if let Some(level) = assign_level(candidate, line.font_size, patterns, &tiers) {
                outline.push(OutlineEntry {
                    level,
                    text: normalize_heading(candidate),
                    page: line.page_number.saturating_sub(1) as usize,
                });
            }
        }
    }

    let outline = assemble(outline);
    log::debug!(
        "document: {} lines, language {}, {} headings, title {:?}",
        lines.len(),
        language.tag(),
        outline.len(),
        title
    );

    OutlineResult {
        title,
        outline,
        language,
    }
}

/// The noise battery plus title-line exclusion, in cascade order.
fn is_rejected_line(line: &Line, title_keys: &HashSet<(String, u32)>) -> bool {
    let text = &line.text;
    if text.chars().count() < 3
        || filters::is_form_field(text)
        || filters::is_junk(text)
        || filters::is_url(text)
        || filters::is_bare_number(text)
    {
        return true;
    }
    if title_keys.contains(&(text.clone(), line.page_number)) {
        return true;
    }
    if filters::is_enumerated_list_body(text) {
        return true;
    }
    if filters::is_revision_row(text) || filters::is_table_row(text) {
        return true;
    }
    filters::is_wrapped_fragment(text)
}

/// Decide whether a candidate is a heading, and at what level.
///
/// First matching rule wins: three-level numbering, two-level, single-level,
/// canonical section name, then the font-tier fallback.
fn assign_level(
    candidate: &str,
    font_size: f32,
    patterns: &HeadingPatterns,
    tiers: &FontTiers,
) -> Option<HeadingLevel> {
    if patterns.matches_h3(candidate) {
        Some(HeadingLevel::H3)
    } else if patterns.matches_h2(candidate) {
        Some(HeadingLevel::H2)
    } else if patterns.matches_h1(candidate) {
        Some(HeadingLevel::H1)
    } else if patterns.is_known_section(candidate) {
        Some(HeadingLevel::H1)
    } else {
        font_tier_fallback(candidate, font_size, tiers)
    }
}

/// Level by font tier, for unnumbered headings.
///
/// Eligible only above the body baseline, within sane length bounds, and
/// free of 4-digit runs and colons (dates, ratios, form labels); the level
/// is whichever of the top three tiers the line's size equals exactly.
fn font_tier_fallback(candidate: &str, font_size: f32, tiers: &FontTiers) -> Option<HeadingLevel> {
    let body = tiers.body_size()?;
    if font_size <= body {
        return None;
    }
    let len = candidate.chars().count();
    if !(FALLBACK_MIN_LEN..=FALLBACK_MAX_LEN).contains(&len) {
        return None;
    }
    if filters::contains_four_digit_run(candidate) || candidate.contains(':') {
        return None;
    }
    if Some(font_size) == tiers.h1_size() {
        Some(HeadingLevel::H1)
    } else if Some(font_size) == tiers.h2_size() {
        Some(HeadingLevel::H2)
    } else if Some(font_size) == tiers.h3_size() {
        Some(HeadingLevel::H3)
    } else {
        None
    }
}

/// Select and concatenate the title lines.
///
/// Title lines sit on the first [`TITLE_PAGE_LIMIT`] pages at exactly the
/// top font tier, are longer than 2 characters, and are neither junk nor a
/// known section name. Their `(text, page)` keys are returned so the
/// outline pass can skip them. A title with no recognized-script content is
/// emptied, but its keys still stand.
fn extract_title(
    lines: &[Line],
    tiers: &FontTiers,
    patterns: &HeadingPatterns,
) -> (String, HashSet<(String, u32)>) {
    let mut keys = HashSet::new();
    let Some(top_size) = tiers.h1_size() else {
        return (String::new(), keys);
    };

    let mut parts = Vec::new();
    for line in lines {
        if line.page_number <= TITLE_PAGE_LIMIT
            && line.font_size == top_size
            && line.text.chars().count() > 2
            && !filters::is_junk(&line.text)
            && !patterns.is_known_section(&line.text)
        {
            keys.insert((line.text.clone(), line.page_number));
            parts.push(line.text.as_str());
        }
    }

    let title = parts.join(" ");
    if title.chars().any(is_recognized_script_char) {
        (title, keys)
    } else {
        (String::new(), keys)
    }
}

/// Deduplicate, order and final-filter the candidate list.
fn assemble(mut outline: Vec<OutlineEntry>) -> Vec<OutlineEntry> {
    let mut seen = HashSet::new();
    outline.retain(|entry| seen.insert((entry.text.clone(), entry.page)));

    // Stable: same-page entries keep discovery order.
    outline.sort_by_key(|entry| entry.page);

    outline.retain(|entry| entry.text.chars().count() > 3 && !filters::is_form_field(&entry.text));
    outline
}
