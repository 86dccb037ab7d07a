//! Catalog loading — JSON array of wire records to validated properties.
//!
//! Each element is validated on its own. A bad element is quarantined with
//! its index and reason, unless strict loading is requested, in which case
//! the first bad element fails the whole load.

use crate::{
    error::{CatalogError, CatalogResult},
    property::Property,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A record that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuarantinedRecord {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub quarantined: Vec<QuarantinedRecord>,
}

impl Catalog {
    /// Read and validate a catalog file.
    pub fn load(path: impl AsRef<Path>, strict: bool) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content, strict)?;
        log::info!(
            "catalog: loaded {} properties from {} ({} quarantined)",
            catalog.properties.len(),
            path.display(),
            catalog.quarantined.len()
        );
        Ok(catalog)
    }

    /// Parse a JSON document that must be an array of objects.
    pub fn from_json_str(content: &str, strict: bool) -> CatalogResult<Self> {
        let elements: Vec<serde_json::Value> = serde_json::from_str(content)?;
        Self::from_values(elements, strict)
    }

    pub fn from_values(elements: Vec<serde_json::Value>, strict: bool) -> CatalogResult<Self> {
        let mut catalog = Self::default();
        for (index, element) in elements.into_iter().enumerate() {
            let id = element.get("id").and_then(id_hint);
            match serde_json::from_value::<Property>(element) {
                Ok(property) => catalog.properties.push(property),
                Err(e) => {
                    let reason = e.to_string();
                    if strict {
                        return Err(CatalogError::InvalidRecord { index, reason });
                    }
                    log::warn!("catalog: quarantined record {index} ({id:?}): {reason}");
                    catalog.quarantined.push(QuarantinedRecord { index, id, reason });
                }
            }
        }
        Ok(catalog)
    }
}

fn id_hint(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
