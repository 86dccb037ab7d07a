use crate::query::{SortField, SortOrder};
use serde::{Deserialize, Serialize};

fn default_data_path() -> String {
    "./data/processed_data.json".into()
}

fn default_currency_symbol() -> String {
    "₱".into()
}

/// Runner configuration. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Fail the load on the first malformed record instead of quarantining it.
    #[serde(default)]
    pub strict_loading: bool,
    #[serde(default)]
    pub default_sort_field: SortField,
    #[serde(default)]
    pub default_sort_order: SortOrder,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            currency_symbol: default_currency_symbol(),
            strict_loading: false,
            default_sort_field: SortField::Price,
            default_sort_order: SortOrder::Asc,
        }
    }
}

impl CatalogConfig {
    /// Load from a JSON config file.
    /// In tests, use CatalogConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {path}: {e}"))?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            data_path: "../data/processed_data.json".into(),
            strict_loading: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{ "default_sort_order": "desc" }"#).unwrap();
        assert_eq!(config.default_sort_order, SortOrder::Desc);
        assert_eq!(config.default_sort_field, SortField::Price);
        assert_eq!(config.currency_symbol, "₱");
        assert!(!config.strict_loading);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let result = serde_json::from_str::<CatalogConfig>(r#"{ "default_sort_field": "bedrooms" }"#);
        assert!(result.is_err(), "unknown sort field should not load");
    }
}
