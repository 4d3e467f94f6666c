//! Font-size tiering for heading-level inference.
//!
//! With no explicit structure to lean on, font size is the strongest proxy
//! for hierarchy: the top three distinct sizes in a document become the
//! H1/H2/H3 tiers, and the single most frequent size is taken as the
//! running body text baseline. A line is only eligible for tier-based
//! heading fallback when its font strictly exceeds that baseline.

use crate::layout::line_builder::Line;
use crate::utils::safe_float_cmp;

/// Document-wide font geometry: ranked heading tiers and the body baseline.
#[derive(Debug, Clone, Default)]
pub struct FontTiers {
    /// Distinct font sizes present in the document, largest first.
    sizes: Vec<f32>,

    /// The most frequent font size, if the document has any lines.
    body_size: Option<f32>,
}

impl FontTiers {
    /// Measure tiers over all built lines of a document.
    ///
    /// Distinct sizes are ranked descending with exact-equality dedup (all
    /// sizes derive from the same `sqrt(a² + b²)` computation, so equal
    /// tiers compare bitwise equal). Fewer than three distinct sizes is a
    /// valid degenerate case. When two sizes tie for the highest line
    /// count, the larger size wins the body baseline, a deterministic
    /// tie-break where frequency alone is ambiguous.
    pub fn estimate(lines: &[Line]) -> Self {
        let mut sizes: Vec<f32> = lines.iter().map(|l| l.font_size).collect();
        sizes.sort_by(|a, b| safe_float_cmp(*b, *a));
        sizes.dedup();

        let mut counts: Vec<(f32, usize)> = Vec::new();
        for line in lines {
            match counts.iter_mut().find(|(size, _)| *size == line.font_size) {
                Some((_, count)) => *count += 1,
                None => counts.push((line.font_size, 1)),
            }
        }
        let body_size = counts
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(safe_float_cmp(a.0, b.0)))
            .map(|(size, _)| *size);

        log::debug!(
            "font tiers: {} distinct sizes, top {:?}, body {:?}",
            sizes.len(),
            &sizes[..sizes.len().min(3)],
            body_size
        );

        Self { body_size, sizes }
    }

    /// The largest font size present (the H1 tier), if any.
    pub fn h1_size(&self) -> Option<f32> {
        self.sizes.first().copied()
    }

    /// The second-largest font size (the H2 tier), if any.
    pub fn h2_size(&self) -> Option<f32> {
        self.sizes.get(1).copied()
    }

    /// The third-largest font size (the H3 tier), if any.
    pub fn h3_size(&self) -> Option<f32> {
        self.sizes.get(2).copied()
    }

    /// The body-text baseline: the most frequent font size in the document.
    pub fn body_size(&self) -> Option<f32> {
        self.body_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, font_size: f32) -> Line {
        Line {
            text: text.to_string(),
            font_size,
            page_number: 1,
            y: 0.0,
        }
    }

    #[test]
    fn test_tiers_ranked_descending() {
        let lines = vec![line("a", 10.0), line("b", 24.0), line("c", 16.0), line("d", 10.0)];
        let tiers = FontTiers::estimate(&lines);
        assert_eq!(tiers.h1_size(), Some(24.0));
        assert_eq!(tiers.h2_size(), Some(16.0));
        assert_eq!(tiers.h3_size(), Some(10.0));
    }

    #[test]
    fn test_fewer_than_three_sizes_is_valid() {
        let lines = vec![line("a", 12.0), line("b", 12.0)];
        let tiers = FontTiers::estimate(&lines);
        assert_eq!(tiers.h1_size(), Some(12.0));
        assert_eq!(tiers.h2_size(), None);
        assert_eq!(tiers.h3_size(), None);
    }

    #[test]
    fn test_body_size_is_most_frequent() {
        let lines = vec![line("a", 24.0), line("b", 10.0), line("c", 10.0), line("d", 10.0)];
        let tiers = FontTiers::estimate(&lines);
        assert_eq!(tiers.body_size(), Some(10.0));
    }

    #[test]
    fn test_body_size_tie_prefers_larger() {
        let lines = vec![line("a", 10.0), line("b", 10.0), line("c", 12.0), line("d", 12.0)];
        let tiers = FontTiers::estimate(&lines);
        assert_eq!(tiers.body_size(), Some(12.0));
    }

    #[test]
    fn test_empty_document() {
        let tiers = FontTiers::estimate(&[]);
        assert_eq!(tiers.h1_size(), None);
        assert_eq!(tiers.body_size(), None);
    }
}
