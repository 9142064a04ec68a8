//! In-process implementation of the text-rendering contract.

use lopdf::Document;
use tracing::debug;

use super::{LayoutMode, TextRenderer};
use crate::error::{ExtractError, Result};

/// Page carrying the scalar fields in this vendor's invoice template.
const SIMPLE_PAGE: u32 = 2;

/// PDF text renderer backed by lopdf for page-scoped extraction and
/// pdf-extract for the layout-preserving pass.
#[derive(Debug)]
pub struct PdfTextRenderer {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfTextRenderer {
    /// Parse a PDF from raw bytes.
    ///
    /// Fails with [`ExtractError::DocumentUnreadable`] if the bytes are not a
    /// well-formed PDF, the document cannot be decrypted with an empty
    /// password, or it has no pages.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(data)
            .map_err(|e| ExtractError::DocumentUnreadable(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(ExtractError::DocumentUnreadable(
                    "document is encrypted".to_string(),
                ));
            }
            debug!("Decrypted PDF with empty password");

            // Keep decrypted bytes for the layout-preserving renderer.
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| ExtractError::DocumentUnreadable(e.to_string()))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(ExtractError::DocumentUnreadable(
                "document has no pages".to_string(),
            ));
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self {
            document: doc,
            raw_data,
        })
    }

    /// Number of pages in the loaded document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// The page read in `simple` mode, clamped to the last page for
    /// documents shorter than the template.
    fn simple_page(&self) -> u32 {
        SIMPLE_PAGE.min(self.page_count())
    }
}

impl TextRenderer for PdfTextRenderer {
    fn render(&self, mode: LayoutMode) -> Result<String> {
        let text = match mode {
            LayoutMode::Simple => {
                let page = self.simple_page();
                debug!("Rendering page {} in simple mode", page);
                self.document
                    .extract_text(&[page])
                    .map_err(|e| ExtractError::RenderFailed {
                        mode,
                        detail: e.to_string(),
                    })?
            }
            LayoutMode::Columns => {
                debug!("Rendering all pages in columns mode");
                pdf_extract::extract_text_from_mem(&self.raw_data).map_err(|e| {
                    ExtractError::RenderFailed {
                        mode,
                        detail: e.to_string(),
                    }
                })?
            }
        };

        debug!("Rendered {} chars in {} mode", text.len(), mode);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_garbage() {
        let err = PdfTextRenderer::load(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::DocumentUnreadable(_)));
    }

    #[test]
    fn test_load_rejects_empty_input() {
        let err = PdfTextRenderer::load(&[]).unwrap_err();
        assert!(matches!(err, ExtractError::DocumentUnreadable(_)));
    }

    #[test]
    fn test_load_rejects_pageless_document() {
        let mut bytes = Vec::new();
        Document::with_version("1.5").save_to(&mut bytes).unwrap();

        let err = PdfTextRenderer::load(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::DocumentUnreadable(_)));
    }
}
