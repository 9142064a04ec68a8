//! Line-oriented decomposition of the captured billing block.
//!
//! The block interleaves a party name, address lines, and an optional
//! embedded GST line with no delimiter other than line breaks and a
//! terminating country marker, so it is walked once with an explicit line
//! classifier rather than matched with a single pattern.

use super::rules::RuleSet;

/// Classification of one line inside the billing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    /// Empty after trimming; discarded.
    Blank,
    /// Carries the embedded GST identifier; never part of the address.
    TaxId,
    /// A country-code marker; included in the address, then terminal.
    Terminator,
    /// An ordinary name or address line.
    Address,
}

fn classify(line: &str, markers: &[String]) -> LineClass {
    if line.is_empty() {
        LineClass::Blank
    } else if line.to_lowercase().contains("gst registration no") {
        LineClass::TaxId
    } else if markers.iter().any(|m| m == line) {
        LineClass::Terminator
    } else {
        LineClass::Address
    }
}

/// Decomposed billing block: party name, joined address, embedded tax ID.
/// Any component the block did not carry is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingBlock {
    pub name: String,
    pub address: String,
    pub tax_id: String,
}

/// Split the raw billing-block capture into name, address, and tax ID.
///
/// Single pass over the lines. Address accumulation stops after the first
/// country-code marker, but later lines are still scanned for the GST line,
/// which can trail the address in the source. With no marker present every
/// non-blank, non-tax-ID line counts as address (fail open).
pub fn parse_billing_block(block: &str, rules: &RuleSet, markers: &[String]) -> BillingBlock {
    let mut parts: Vec<&str> = Vec::new();
    let mut terminated = false;
    let mut tax_id = String::new();

    for raw in block.lines() {
        let line = raw.trim();
        match classify(line, markers) {
            LineClass::Blank => continue,
            LineClass::TaxId => {
                if let Some(id) = rules.tax_id(line) {
                    tax_id = id;
                }
            }
            class => {
                if !terminated {
                    parts.push(line);
                    if class == LineClass::Terminator {
                        terminated = true;
                    }
                }
            }
        }
    }

    BillingBlock {
        name: parts.first().copied().unwrap_or_default().to_string(),
        address: if parts.len() > 1 {
            parts[1..].join(", ")
        } else {
            String::new()
        },
        tax_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(block: &str) -> BillingBlock {
        let rules = RuleSet::new();
        let markers = vec!["IN".to_string(), "CA".to_string()];
        parse_billing_block(block, &rules, &markers)
    }

    #[test]
    fn test_name_address_and_embedded_tax_id() {
        let block = "Jane Doe\n123 Main St\nGST Registration No: 19ABCDE1234F1Z1\nSpringfield\nIN\n";
        let parsed = parse(block);

        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.address, "123 Main St, Springfield, IN");
        assert_eq!(parsed.tax_id, "19ABCDE1234F1Z1");
    }

    #[test]
    fn test_lines_after_marker_are_dropped() {
        let block = "Jane Doe\n123 Main St\nIN\nPhone: 555-0100\nsome footer";
        let parsed = parse(block);

        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.address, "123 Main St, IN");
    }

    #[test]
    fn test_tax_id_line_after_marker_is_still_read() {
        let block = "Jane Doe\n123 Main St\nIN\nGST Registration No: 19ABCDE1234F1Z1";
        let parsed = parse(block);

        assert_eq!(parsed.address, "123 Main St, IN");
        assert_eq!(parsed.tax_id, "19ABCDE1234F1Z1");
    }

    #[test]
    fn test_no_marker_fails_open() {
        let block = "Jane Doe\n123 Main St\nSpringfield\nWest Province";
        let parsed = parse(block);

        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.address, "123 Main St, Springfield, West Province");
    }

    #[test]
    fn test_blank_lines_are_discarded() {
        let block = "\nJane Doe\n\n  \n123 Main St\n\nIN";
        let parsed = parse(block);

        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.address, "123 Main St, IN");
    }

    #[test]
    fn test_marker_must_be_whole_line() {
        // "IN" inside a longer line does not terminate.
        let block = "Jane Doe\nIN THE PARK 5\nSpringfield\nIN";
        let parsed = parse(block);

        assert_eq!(parsed.address, "IN THE PARK 5, Springfield, IN");
    }

    #[test]
    fn test_empty_block() {
        let parsed = parse("");
        assert_eq!(parsed, BillingBlock::default());

        let parsed = parse("\n \n");
        assert_eq!(parsed, BillingBlock::default());
    }

    #[test]
    fn test_single_line_is_name_only() {
        let parsed = parse("Jane Doe");
        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.address, "");
    }
}
