//! PDF layout-text rendering using lopdf and pdf-extract.

mod renderer;

pub use renderer::PdfTextRenderer;

use std::fmt;

use crate::error::Result;

/// Strategy for linearizing a page's visual content into text.
///
/// The source template cannot be read correctly under a single strategy: the
/// scalar fields line up in plain reading order, while the billing block spans
/// side-by-side columns and only survives a column-preserving pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Reading order close to visual line order.
    Simple,
    /// Reading order that keeps column groupings together.
    Columns,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Simple => write!(f, "simple"),
            LayoutMode::Columns => write!(f, "columns"),
        }
    }
}

/// Trait for text-rendering capabilities.
///
/// Implementations must be deterministic: the same document and mode always
/// produce the same text.
pub trait TextRenderer {
    /// Render the document as plain text under the given layout mode.
    fn render(&self, mode: LayoutMode) -> Result<String>;
}
