//! # Outline Oxide
//!
//! Infers a document's title and hierarchical heading outline (H1/H2/H3, with
//! per-page positions) from a flat stream of positioned text fragments, for
//! documents that carry no explicit outline metadata.
//!
//! ## Pipeline
//!
//! The engine is a layered heuristic classifier over noisy layout data:
//!
//! 1. **Line building**: fragments are clustered into visual lines by vertical
//!    proximity and ordered left-to-right ([`layout::line_builder`])
//! 2. **Script detection**: the earliest lines select one of six script
//!    families, which drives pattern choice ([`language`])
//! 3. **Font tiering**: the top three distinct font sizes become heading
//!    tiers; the most frequent size is the body baseline
//!    ([`layout::font_tiers`])
//! 4. **Noise filtering**: form fields, dot leaders, URLs, bare numbers,
//!    enumerated list bodies, tabular rows, and wrapped body text are
//!    excluded ([`filters`])
//! 5. **Heading splitting**: lines holding several concatenated numbered
//!    headings become independent candidates ([`splitter`])
//! 6. **Level assignment and assembly**: numbering patterns, canonical
//!    section names, and font-tier fallback produce the final deduplicated,
//!    page-ordered outline ([`outline`])
//!
//! The engine is pure and synchronous: it performs no I/O of its own, holds
//! no state across invocations, and never fails on well-formed input;
//! degenerate documents produce an empty title and outline rather than an
//! error. Callers may process documents in parallel without coordination.
//!
//! ## Quick Start
//!
//! ```
//! use outline_oxide::{detect_outline, Page, TextFragment};
//!
//! let pages = vec![Page {
//!     number: 1,
//!     fragments: vec![
//!         TextFragment::new("A Field Guide To Parsers", [22.0, 0.0, 0.0, 22.0, 72.0, 740.0]),
//!         TextFragment::new("1. Introduction", [16.0, 0.0, 0.0, 16.0, 72.0, 700.0]),
//!         TextFragment::new("Body text follows here, still going.", [10.0, 0.0, 0.0, 10.0, 72.0, 680.0]),
//!         TextFragment::new("More body text follows on the next line.", [10.0, 0.0, 0.0, 10.0, 72.0, 666.0]),
//!     ],
//! }];
//!
//! let result = detect_outline(&pages);
//! assert_eq!(result.title, "A Field Guide To Parsers");
//! assert_eq!(result.outline[0].text, "1. Introduction");
//! ```

#![warn(missing_docs)]

// Error handling for the I/O glue
pub mod error;

// Input model (positioned fragments, as handed over by text extraction)
pub mod fragment;

// Line building and font geometry
pub mod layout;

// Script detection and per-language heading patterns
pub mod language;

// Noise-filter predicate battery
pub mod filters;

// Concatenated-heading splitting and text normalization
pub mod splitter;

// The outline-inference engine itself
pub mod outline;

// Re-exports
pub use error::{Error, Result};
pub use fragment::{Page, TextFragment};
pub use language::Language;
pub use layout::{FontTiers, Line};
pub use outline::{HeadingLevel, OutlineEntry, OutlineResult, detect_outline};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
