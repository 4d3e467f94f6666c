//! Property tests for the engine's structural invariants.
//!
//! Whatever the input, the outline must come back page-ordered with unique
//! `(text, page)` keys, every emitted heading must survive the final
//! filter, and the engine must be a pure function of its input.

use outline_oxide::{Page, TextFragment, detect_outline, filters};
use proptest::prelude::*;
use std::collections::HashSet;

/// Fragments over a small set of plausible font sizes and positions, with
/// content ranging from heading-like to noise.
fn arb_fragment() -> impl Strategy<Value = TextFragment> {
    let content = prop_oneof![
        "[A-Za-z][A-Za-z0-9 .:]{0,40}",
        "[0-9]{1,2}\\. [A-Z][a-z ]{0,30}",
        Just("Introduction".to_string()),
        Just("....................".to_string()),
        Just("2023".to_string()),
    ];
    (content, prop::sample::select(vec![9.0f32, 10.0, 12.0, 14.0, 18.0, 24.0]), 0u32..750u32)
        .prop_map(|(content, size, y)| {
            TextFragment::new(content, [size, 0.0, 0.0, size, 72.0, y as f32])
        })
}

fn arb_pages() -> impl Strategy<Value = Vec<Page>> {
    prop::collection::vec(prop::collection::vec(arb_fragment(), 0..20), 0..4).prop_map(|pages| {
        pages
            .into_iter()
            .enumerate()
            .map(|(i, fragments)| Page {
                number: i as u32 + 1,
                fragments,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn outline_is_page_ordered_and_unique(pages in arb_pages()) {
        let result = detect_outline(&pages);

        prop_assert!(result.outline.windows(2).all(|w| w[0].page <= w[1].page));

        let mut seen = HashSet::new();
        for entry in &result.outline {
            prop_assert!(seen.insert((entry.text.clone(), entry.page)));
        }
    }

    #[test]
    fn emitted_headings_survive_the_final_filter(pages in arb_pages()) {
        let result = detect_outline(&pages);
        for entry in &result.outline {
            prop_assert!(entry.text.chars().count() > 3);
            prop_assert!(!filters::is_form_field(&entry.text));
        }
    }

    #[test]
    fn engine_is_idempotent(pages in arb_pages()) {
        prop_assert_eq!(detect_outline(&pages), detect_outline(&pages));
    }

    #[test]
    fn nonempty_title_has_recognized_content(pages in arb_pages()) {
        let result = detect_outline(&pages);
        if !result.title.is_empty() {
            prop_assert!(result.title.chars().any(|c| c.is_ascii_alphanumeric()));
        }
    }
}
