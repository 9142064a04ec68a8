//! The structured extraction result.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from one invoice document.
///
/// Extraction is best effort: a field whose rule did not match is the empty
/// string, never an error. Every non-empty value is normalized (single
/// spaces, trimmed, no raw newlines).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub invoice_date: String,
    pub order_number: String,
    pub order_date: String,
    pub billing_name: String,
    pub billing_address: String,
    pub state_code: String,
    pub client_tax_id: String,
    pub tax_amount: String,
    pub total_amount: String,
    pub hsn_code: String,
    pub item_code: String,
    pub sold_by: String,
    pub shipping_address: String,
}

impl InvoiceRecord {
    /// Names of the fields that came back empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// All fields as (name, value) pairs, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("invoice_number", &self.invoice_number),
            ("invoice_date", &self.invoice_date),
            ("order_number", &self.order_number),
            ("order_date", &self.order_date),
            ("billing_name", &self.billing_name),
            ("billing_address", &self.billing_address),
            ("state_code", &self.state_code),
            ("client_tax_id", &self.client_tax_id),
            ("tax_amount", &self.tax_amount),
            ("total_amount", &self.total_amount),
            ("hsn_code", &self.hsn_code),
            ("item_code", &self.item_code),
            ("sold_by", &self.sold_by),
            ("shipping_address", &self.shipping_address),
        ]
    }
}
