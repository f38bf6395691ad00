use anyhow::{Context, Result};
use serde::Deserialize;

/// GeoJSON subset: only feature names are read.
#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

/// Names of every feature that has one, in file order.
///
/// # Errors
/// Returns an error if the input is not valid JSON.
pub fn feature_names(json: &str) -> Result<Vec<String>> {
    let collection: FeatureCollection =
        serde_json::from_str(json).context("GeoJSON invalide")?;
    Ok(collection
        .features
        .into_iter()
        .filter_map(|f| f.properties.and_then(|p| p.name))
        .collect())
}
