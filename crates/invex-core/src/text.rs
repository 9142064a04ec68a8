//! Whitespace normalization applied to every extracted value.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse all whitespace runs (including newlines) into single spaces and
/// trim the edges.
///
/// Pure and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_newlines_become_single_spaces() {
        assert_eq!(normalize("123 Main St\nSpringfield\n\nIN"), "123 Main St Springfield IN");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize("  padded  "), "padded");
        assert_eq!(normalize("\n\n"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "  a \n b ", "already normal", "\t\r\n mixed \u{00a0}ws"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
