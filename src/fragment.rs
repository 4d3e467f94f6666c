//! Positioned text fragments as handed over by document text extraction.
//!
//! The extraction step (a PDF text extractor or any other layout-aware
//! parser) is outside this crate; it delivers per-page sequences of
//! [`TextFragment`], each carrying its string content and a 2-D affine
//! transform. The engine consumes this input without mutating it.
//!
//! Fragment streams cross the process boundary as JSON (an array of pages,
//! each with a 1-based `number` and its `fragments`), loaded via
//! [`load_pages`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single positioned run of text reported by text extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The fragment's text content.
    pub content: String,

    /// Affine transform coefficients `[a, b, c, d, e, f]`.
    ///
    /// Matrix layout:
    /// ```text
    /// [ a  b  0 ]
    /// [ c  d  0 ]
    /// [ e  f  1 ]
    /// ```
    /// Where `(a, d)` = scaling, `(b, c)` = rotation/skew and `(e, f)` =
    /// translation. The engine derives the effective font size from the
    /// first column and reads the fragment's position from the translation.
    pub transform: [f32; 6],
}

impl TextFragment {
    /// Create a fragment from its content and transform.
    pub fn new(content: impl Into<String>, transform: [f32; 6]) -> Self {
        Self {
            content: content.into(),
            transform,
        }
    }

    /// Effective font size: the magnitude of the transform's first column,
    /// `sqrt(a² + b²)`. Robust against rotation, which plain `a` is not.
    pub fn font_size(&self) -> f32 {
        let [a, b, ..] = self.transform;
        (a * a + b * b).sqrt()
    }

    /// Horizontal position (the `e` translation coefficient).
    pub fn x(&self) -> f32 {
        self.transform[4]
    }

    /// Vertical position (the `f` translation coefficient).
    pub fn y(&self) -> f32 {
        self.transform[5]
    }
}

/// One page of extracted fragments.
///
/// Page numbers are 1-based, matching what extraction tools report;
/// outline entries convert to 0-based indices on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: u32,

    /// Fragments in extraction order.
    pub fragments: Vec<TextFragment>,
}

/// Load a fragment stream (a JSON array of pages) from a file.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file cannot be read and
/// [`crate::Error::Json`] if it does not deserialize to a page array.
pub fn load_pages(path: &Path) -> Result<Vec<Page>> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
