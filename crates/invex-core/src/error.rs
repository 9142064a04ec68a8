//! Error types for the invex-core library.

use thiserror::Error;

use crate::pdf::LayoutMode;

/// Main error type for the invex library.
///
/// Only the two unrecoverable categories are represented here. An individual
/// field rule failing to match is not an error; the field stays empty in the
/// resulting record.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input is not a well-formed PDF, cannot be decrypted, or has no pages.
    #[error("unreadable document: {0}")]
    DocumentUnreadable(String),

    /// A text rendering pass failed, with the renderer's diagnostic output.
    #[error("text rendering failed ({mode}): {detail}")]
    RenderFailed { mode: LayoutMode, detail: String },
}

/// Result type for the invex library.
pub type Result<T> = std::result::Result<T, ExtractError>;
