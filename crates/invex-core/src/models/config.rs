//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable configuration, constructed once at startup and shared by
/// reference into every extraction call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// The seller's own GST identifier. A captured tax ID equal to this
    /// (case-insensitively) is never attributed to the client.
    pub seller_tax_id: String,

    /// Country-code markers that terminate address-line accumulation.
    pub country_markers: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            seller_tax_id: "19APGPS1824K1ZI".to_string(),
            country_markers: vec!["IN".to_string(), "CA".to_string()],
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.seller_tax_id, "19APGPS1824K1ZI");
        assert_eq!(config.country_markers, vec!["IN", "CA"]);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"seller_tax_id": "27AAAAA0000A1Z5"}"#).unwrap();
        assert_eq!(config.seller_tax_id, "27AAAAA0000A1Z5");
        assert_eq!(config.country_markers, vec!["IN", "CA"]);
    }
}
