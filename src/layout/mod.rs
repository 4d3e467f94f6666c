//! Layout analysis for outline inference.
//!
//! This module turns raw positioned fragments into the geometry the
//! heuristics operate on:
//! - vertical-proximity clustering (fragments → visual lines)
//! - font-size tiering (heading tiers + body-text baseline)

pub mod font_tiers;
pub mod line_builder;

// Re-export main types
pub use font_tiers::FontTiers;
pub use line_builder::{Line, build_lines};
