//! Data models for invoice extraction.

pub mod config;
pub mod record;

pub use config::ExtractorConfig;
pub use record::InvoiceRecord;
