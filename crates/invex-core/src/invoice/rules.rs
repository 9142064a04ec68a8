//! The ordered field-rule table and its pattern semantics.

use std::collections::HashMap;

use regex::Regex;

use crate::pdf::LayoutMode;

/// Record fields driven by a single pattern rule.
///
/// The billing block is not listed here: it is located by a block pattern and
/// decomposed by the address parser rather than captured as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InvoiceNumber,
    InvoiceDate,
    OrderNumber,
    OrderDate,
    StateCode,
    TaxAmount,
    TotalAmount,
    HsnCode,
    ItemCode,
    SoldBy,
    ShippingAddress,
}

/// One extraction rule: a field, the pattern that locates it, the capture
/// group holding the value, and the layout rendering it reads from.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    field: Field,
    pattern: Regex,
    group: usize,
    mode: LayoutMode,
}

impl ExtractionRule {
    fn new(field: Field, pattern: Regex, group: usize, mode: LayoutMode) -> Self {
        Self {
            field,
            pattern,
            group,
            mode,
        }
    }

    fn capture(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str().to_string())
    }
}

/// The compiled rule table plus the block and tax-ID patterns.
///
/// Compiled once at startup and shared immutably across extraction calls; no
/// pattern is ever recompiled per call.
pub struct RuleSet {
    rules: Vec<ExtractionRule>,
    billing_block: Regex,
    tax_id: Regex,
}

impl RuleSet {
    /// Compile the ordered rule table for the vendor's invoice template.
    pub fn new() -> Self {
        use Field::*;
        use LayoutMode::Simple;

        // Tax and total amounts share one pattern: the first two
        // decimal-formatted numbers on the TOTAL line, in order.
        let tax_and_total =
            Regex::new(r"(?i)TOTAL\s*[:\-]?\s*.*?([\d,]+\.\d{2})\s*.*?([\d,]+\.\d{2})").unwrap();

        let rules = vec![
            ExtractionRule::new(
                InvoiceNumber,
                Regex::new(r"(?i)Invoice\s*Number\s*[:\-]?\s*(\S+)").unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(
                InvoiceDate,
                Regex::new(r"(?i)Invoice\s*Date\s*[:\-]?\s*([0-9]{2}[./-][0-9]{2}[./-][0-9]{4})")
                    .unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(
                OrderNumber,
                Regex::new(r"(?i)Order\s*Number\s*[:\-]?\s*([A-Z0-9\-]+)").unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(
                OrderDate,
                Regex::new(r"(?i)Order\s*Date\s*[:\-]?\s*([0-9]{2}[./-][0-9]{2}[./-][0-9]{4})")
                    .unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(
                StateCode,
                Regex::new(r"(?i)State/UT\s*Code\s*[:\-]?\s*(\d{2})").unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(TaxAmount, tax_and_total.clone(), 1, Simple),
            ExtractionRule::new(TotalAmount, tax_and_total, 2, Simple),
            ExtractionRule::new(
                HsnCode,
                Regex::new(r"(?i)HSN\s*[:\-]?\s*(\d+)").unwrap(),
                1,
                Simple,
            ),
            // The template has no label for the item code. This heuristic
            // keys off its position: a 10-char alphanumeric token after a
            // pipe or whitespace and before a parenthesis or rupee sign.
            // Template-specific; do not expect it to generalize.
            ExtractionRule::new(
                ItemCode,
                Regex::new(r"[|\s]+([A-Z0-9]{10})\s*(?:\(|\u{20B9})").unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(
                SoldBy,
                Regex::new(r"(?is)Sold\s*By\s*[:\-]?\s*(.*?)\s*Billing Address").unwrap(),
                1,
                Simple,
            ),
            ExtractionRule::new(
                ShippingAddress,
                Regex::new(r"(?is)Shipping Address\s*[:\-]?\s*(.*?)\s*State/UT\s*Code").unwrap(),
                1,
                Simple,
            ),
        ];

        Self {
            rules,
            billing_block: Regex::new(
                r"(?is)Billing Address\s*[:\-]?\s*(.*?)\s*(?:Shipping Address|Invoice Number|State/UT Code)",
            )
            .unwrap(),
            tax_id: Regex::new(r"(?i)GST(?:IN)?(?: Registration)? No\s*[:\-]?\s*(\S+)").unwrap(),
        }
    }

    /// Apply every rule against the rendering its mode selects.
    ///
    /// Rules are independent: a non-match leaves its field absent from the
    /// map and never affects another rule's evaluation. Captures are raw;
    /// normalization happens when the record is assembled.
    pub fn extract(&self, simple: &str, columns: &str) -> HashMap<Field, String> {
        let mut captures = HashMap::new();
        for rule in &self.rules {
            let text = match rule.mode {
                LayoutMode::Simple => simple,
                LayoutMode::Columns => columns,
            };
            if let Some(value) = rule.capture(text) {
                captures.insert(rule.field, value);
            }
        }
        captures
    }

    /// Locate the raw, multi-line billing block in the column rendering.
    ///
    /// The block runs from the "Billing Address" label to whichever of the
    /// next section labels occurs first.
    pub fn billing_block<'t>(&self, columns: &'t str) -> Option<&'t str> {
        self.billing_block
            .captures(columns)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extract a GST identifier from a single line.
    pub fn tax_id(&self, line: &str) -> Option<String> {
        self.tax_id
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
