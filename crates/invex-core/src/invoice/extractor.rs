//! Assembles both text renderings into one record.

use tracing::debug;

use crate::error::Result;
use crate::models::config::ExtractorConfig;
use crate::models::record::InvoiceRecord;
use crate::pdf::{LayoutMode, PdfTextRenderer, TextRenderer};
use crate::text::normalize;

use super::address::parse_billing_block;
use super::rules::{Field, RuleSet};

/// The extraction pipeline: renders a document under both layout modes,
/// applies the rule table, and merges the results into an [`InvoiceRecord`].
///
/// Stateless per call; one extractor can serve any number of concurrent
/// extractions since the rule table and configuration are immutable.
pub struct InvoiceExtractor {
    rules: RuleSet,
    config: ExtractorConfig,
}

impl InvoiceExtractor {
    /// Create an extractor with a compiled rule table and the given config.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            rules: RuleSet::new(),
            config,
        }
    }

    /// Extract a record from raw PDF bytes using the in-process renderer.
    pub fn extract(&self, data: &[u8]) -> Result<InvoiceRecord> {
        let renderer = PdfTextRenderer::load(data)?;
        self.extract_with(&renderer)
    }

    /// Extract a record through any text-rendering capability.
    pub fn extract_with(&self, renderer: &dyn TextRenderer) -> Result<InvoiceRecord> {
        let simple = renderer.render(LayoutMode::Simple)?;
        let columns = renderer.render(LayoutMode::Columns)?;
        Ok(self.assemble(&simple, &columns))
    }

    /// Merge rule captures and the parsed billing block into one record.
    ///
    /// This is the only place cross-field logic runs: every scalar capture is
    /// normalized and stored as-is, and the seller's own tax ID is never
    /// attributed to the client.
    pub fn assemble(&self, simple: &str, columns: &str) -> InvoiceRecord {
        let mut record = InvoiceRecord::default();

        for (field, raw) in self.rules.extract(simple, columns) {
            let value = normalize(&raw);
            match field {
                Field::InvoiceNumber => record.invoice_number = value,
                Field::InvoiceDate => record.invoice_date = value,
                Field::OrderNumber => record.order_number = value,
                Field::OrderDate => record.order_date = value,
                Field::StateCode => record.state_code = value,
                Field::TaxAmount => record.tax_amount = value,
                Field::TotalAmount => record.total_amount = value,
                Field::HsnCode => record.hsn_code = value,
                Field::ItemCode => record.item_code = value,
                Field::SoldBy => record.sold_by = value,
                Field::ShippingAddress => record.shipping_address = value,
            }
        }

        if let Some(block) = self.rules.billing_block(columns) {
            let billing = parse_billing_block(block, &self.rules, &self.config.country_markers);
            record.billing_name = normalize(&billing.name);
            record.billing_address = normalize(&billing.address);
            if billing.tax_id.eq_ignore_ascii_case(&self.config.seller_tax_id) {
                debug!("Dropping captured tax ID matching the seller's own");
            } else {
                record.client_tax_id = normalize(&billing.tax_id);
            }
        } else {
            debug!("No billing block found in columns rendering");
        }

        debug!("Assembled record, {} fields empty", record.missing_fields().len());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use pretty_assertions::assert_eq;

    const SIMPLE_TEXT: &str = "\
Tax Invoice

Sold By:
Acme Retail Ltd
Warehouse 4, Industrial Area
Billing Address: see left column
Shipping Address:
John Smith
45 Hill Rd, Bengaluru
State/UT Code: 29
Invoice Number: IN-2024-001
Invoice Date: 12.03.2024
Order Number: 407-1234567-8901234
Order Date: 10/03/2024
Desk Lamp | B07XYZ1234 (Black) HSN: 940370
TOTAL \u{20B9}100.00 \u{20B9}1,100.00
";

    const COLUMNS_TEXT: &str = "\
Billing Address:
Jane Doe
123 Main St
GST Registration No: 19ABCDE1234F1Z1
Springfield
IN
Shipping Address: elsewhere
";

    /// Canned renderer standing in for the PDF-reading capability.
    struct FakeRenderer;

    impl TextRenderer for FakeRenderer {
        fn render(&self, mode: LayoutMode) -> Result<String> {
            Ok(match mode {
                LayoutMode::Simple => SIMPLE_TEXT.to_string(),
                LayoutMode::Columns => COLUMNS_TEXT.to_string(),
            })
        }
    }

    /// Renderer whose columns pass fails.
    struct FailingRenderer;

    impl TextRenderer for FailingRenderer {
        fn render(&self, mode: LayoutMode) -> Result<String> {
            match mode {
                LayoutMode::Simple => Ok(String::new()),
                LayoutMode::Columns => Err(ExtractError::RenderFailed {
                    mode,
                    detail: "renderer exploded".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_full_record_assembly() {
        let extractor = InvoiceExtractor::new(ExtractorConfig::default());
        let record = extractor.extract_with(&FakeRenderer).unwrap();

        assert_eq!(record.invoice_number, "IN-2024-001");
        assert_eq!(record.invoice_date, "12.03.2024");
        assert_eq!(record.order_number, "407-1234567-8901234");
        assert_eq!(record.order_date, "10/03/2024");
        assert_eq!(record.state_code, "29");
        assert_eq!(record.tax_amount, "100.00");
        assert_eq!(record.total_amount, "1,100.00");
        assert_eq!(record.hsn_code, "940370");
        assert_eq!(record.item_code, "B07XYZ1234");
        assert_eq!(record.sold_by, "Acme Retail Ltd Warehouse 4, Industrial Area");
        assert_eq!(record.shipping_address, "John Smith 45 Hill Rd, Bengaluru");
        assert_eq!(record.billing_name, "Jane Doe");
        assert_eq!(record.billing_address, "123 Main St, Springfield, IN");
        assert_eq!(record.client_tax_id, "19ABCDE1234F1Z1");
    }

    #[test]
    fn test_no_field_contains_raw_newlines() {
        let extractor = InvoiceExtractor::new(ExtractorConfig::default());
        let record = extractor.extract_with(&FakeRenderer).unwrap();

        for (name, value) in record.fields() {
            assert!(!value.contains('\n'), "field {name} holds a newline");
            assert_eq!(value, normalize(value), "field {name} is not normalized");
        }
    }

    #[test]
    fn test_seller_tax_id_is_never_the_clients() {
        let config = ExtractorConfig {
            // Case differs from the block's capture on purpose.
            seller_tax_id: "19abcde1234f1z1".to_string(),
            ..Default::default()
        };
        let extractor = InvoiceExtractor::new(config);
        let record = extractor.extract_with(&FakeRenderer).unwrap();

        assert_eq!(record.client_tax_id, "");
        // The rest of the billing block is unaffected.
        assert_eq!(record.billing_name, "Jane Doe");
    }

    #[test]
    fn test_missing_label_leaves_only_that_field_empty() {
        let extractor = InvoiceExtractor::new(ExtractorConfig::default());
        let simple = SIMPLE_TEXT.replace("Invoice Number: IN-2024-001\n", "");
        let record = extractor.assemble(&simple, COLUMNS_TEXT);

        assert_eq!(record.invoice_number, "");
        assert_eq!(record.order_number, "407-1234567-8901234");
        assert_eq!(record.total_amount, "1,100.00");
    }

    #[test]
    fn test_empty_texts_yield_empty_record() {
        let extractor = InvoiceExtractor::new(ExtractorConfig::default());
        let record = extractor.assemble("", "");
        assert_eq!(record, InvoiceRecord::default());
    }

    #[test]
    fn test_render_failure_aborts_extraction() {
        let extractor = InvoiceExtractor::new(ExtractorConfig::default());
        let err = extractor.extract_with(&FailingRenderer).unwrap_err();

        match err {
            ExtractError::RenderFailed { mode, detail } => {
                assert_eq!(mode, LayoutMode::Columns);
                assert_eq!(detail, "renderer exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let extractor = InvoiceExtractor::new(ExtractorConfig::default());
        let first = extractor.extract_with(&FakeRenderer).unwrap();
        let second = extractor.extract_with(&FakeRenderer).unwrap();
        assert_eq!(first, second);
    }
}
