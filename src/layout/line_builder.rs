//! Groups positioned fragments into visual lines.
//!
//! Extraction tools report text as independently positioned runs; glyph runs
//! that share a visual baseline arrive as separate fragments with nearly
//! equal vertical positions. This module clusters them back into lines: a
//! single pass assigns each fragment to the first open line on its page
//! within a fixed vertical threshold, equivalent to single-linkage
//! clustering with no merge-back: once attached, a fragment's line identity
//! is final for that page.

use crate::fragment::{Page, TextFragment};
use crate::utils::safe_float_cmp;

/// Vertical proximity threshold for attaching a fragment to an open line.
///
/// Chosen to merge same-baseline glyph runs while keeping distinct
/// typographic lines apart; 2 units absorbs the sub-point jitter extraction
/// tools introduce on a shared baseline.
const Y_PROXIMITY_THRESHOLD: f32 = 2.0;

/// Fragments on one page judged to share a visual baseline.
///
/// Immutable once built: `text` is the member contents joined left-to-right
/// with single spaces and whitespace-collapsed, `font_size` the maximum
/// across members.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Whitespace-normalized line text.
    pub text: String,

    /// Dominant (maximum) font size across the line's fragments.
    pub font_size: f32,

    /// 1-based page number of the source page.
    pub page_number: u32,

    /// Vertical position of the line (the `f` coefficient of its first
    /// fragment).
    pub y: f32,
}

/// Build lines for a whole document: per-page clustering, flattened in page
/// order. Within a page, lines are ordered top of page first (descending
/// `y`); a page with no fragments contributes nothing.
pub fn build_lines(pages: &[Page]) -> Vec<Line> {
    let mut lines = Vec::new();
    for page in pages {
        build_page_lines(page, &mut lines);
    }
    lines
}

/// Cluster one page's fragments and append the finished lines.
fn build_page_lines(page: &Page, out: &mut Vec<Line>) {
    // Working set of open lines: anchor y + members, in discovery order.
    let mut open: Vec<(f32, Vec<&TextFragment>)> = Vec::new();

    for fragment in &page.fragments {
        let y = fragment.y();
        match open
            .iter_mut()
            .find(|(line_y, _)| (*line_y - y).abs() < Y_PROXIMITY_THRESHOLD)
        {
            Some((_, members)) => members.push(fragment),
            None => open.push((y, vec![fragment])),
        }
    }

    // Left-to-right within a line, top-to-bottom across the page.
    for (_, members) in &mut open {
        members.sort_by(|a, b| safe_float_cmp(a.x(), b.x()));
    }
    open.sort_by(|a, b| safe_float_cmp(b.0, a.0));

    log::trace!("page {}: {} fragments -> {} lines", page.number, page.fragments.len(), open.len());

    out.extend(open.into_iter().map(|(y, members)| {
        let joined = members
            .iter()
            .map(|f| f.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let text = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        let font_size = members.iter().map(|f| f.font_size()).fold(0.0f32, f32::max);
        Line {
            text,
            font_size,
            page_number: page.number,
            y,
        }
    }));
}
