use serde::{Deserialize, Deserializer};

use crate::error::WatchError;

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

// Croma item IDs are numeric, so product files carry them either
// quoted or bare.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Reads the product list file (a JSON array of `{id, name, enabled}`
/// objects). A missing `enabled` field means the product is disabled.
pub fn load(path: &str) -> Result<Vec<Product>, WatchError> {
    let raw = std::fs::read_to_string(path).map_err(|source| WatchError::ProductFile {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| WatchError::ProductParse {
        path: path.to_string(),
        source,
    })
}
