//! Invoice field extraction: rule table, address parser, and assembler.

mod address;
mod extractor;
mod rules;

pub use address::{parse_billing_block, BillingBlock};
pub use extractor::InvoiceExtractor;
pub use rules::{Field, RuleSet};
