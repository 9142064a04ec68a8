//! Core library for fixed-layout GST invoice extraction.
//!
//! This crate provides:
//! - PDF text rendering under two layout modes (`simple` and `columns`)
//! - An ordered rule table for the vendor's invoice template
//! - A line-oriented billing-block parser (name, address, embedded tax ID)
//! - Assembly of both renderings into one flat [`InvoiceRecord`]

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;
pub mod text;

pub use error::{ExtractError, Result};
pub use invoice::{BillingBlock, Field, InvoiceExtractor, RuleSet};
pub use models::config::ExtractorConfig;
pub use models::record::InvoiceRecord;
pub use pdf::{LayoutMode, PdfTextRenderer, TextRenderer};
pub use text::normalize;
