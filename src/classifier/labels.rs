//! Label vocabulary from a Hugging Face `config.json`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::error::ClassifierError;

#[derive(Deserialize)]
struct ClassifierHeadConfig {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

/// Reads `id2label` and returns labels in class-index order.
///
/// Indices must be exactly `0..n`; anything else means logits cannot be mapped
/// back to names.
pub fn read_label_vocabulary(config_path: &Path) -> Result<Vec<String>, ClassifierError> {
    let content = std::fs::read_to_string(config_path)?;
    parse_label_vocabulary(&content)
}

pub fn parse_label_vocabulary(config_json: &str) -> Result<Vec<String>, ClassifierError> {
    let head: ClassifierHeadConfig =
        serde_json::from_str(config_json).map_err(|e| ClassifierError::InvalidConfig {
            reason: format!("Failed to parse config: {}", e),
        })?;

    if head.id2label.is_empty() {
        return Err(ClassifierError::InvalidConfig {
            reason: "config.json has no id2label mapping".to_string(),
        });
    }

    let mut indexed = Vec::with_capacity(head.id2label.len());
    for (id, label) in head.id2label {
        let idx: usize = id.parse().map_err(|_| ClassifierError::InvalidConfig {
            reason: format!("id2label key '{}' is not a class index", id),
        })?;
        indexed.push((idx, label));
    }
    indexed.sort_by_key(|(idx, _)| *idx);

    if let Some((pos, (idx, _))) = indexed
        .iter()
        .enumerate()
        .find(|(pos, (idx, _))| pos != idx)
    {
        return Err(ClassifierError::InvalidConfig {
            reason: format!("id2label is not contiguous: expected index {pos}, found {idx}"),
        });
    }

    Ok(indexed.into_iter().map(|(_, label)| label).collect())
}
