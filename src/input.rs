use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{PortError, Result};
use crate::types::FeatureCollection;

/// Read and decode a GeoJSON feature collection from disk.
pub fn load_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let content = fs::read_to_string(path).map_err(|e| {
        PortError::InputShape(format!("failed to read '{}': {}", path.display(), e))
    })?;
    let collection = parse_feature_collection(&content)?;
    info!(
        "📥 Loaded {} features from {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection)
}

pub fn parse_feature_collection(content: &str) -> Result<FeatureCollection> {
    let document: Value = serde_json::from_str(content)?;
    from_value(document)
}

/// Check the top-level shape before decoding so that a missing `features`
/// array is reported as such rather than as a generic decode error.
pub fn from_value(document: Value) -> Result<FeatureCollection> {
    let Some(object) = document.as_object() else {
        return Err(PortError::InputShape(
            "top-level value is not a JSON object".to_string(),
        ));
    };

    match object.get("features") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(PortError::InputShape(
                "`features` is not an array".to_string(),
            ))
        }
        None => {
            return Err(PortError::InputShape(
                "missing `features` array".to_string(),
            ))
        }
    }

    Ok(serde_json::from_value(document)?)
}
