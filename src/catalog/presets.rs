use std::collections::HashSet;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{debug, warn};

/// Focal lengths appear in the library both as bare numbers and as free
/// text; either way they reach the prompt as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FocalValue {
    Millimetres(i64),
    Text(String),
}

impl FocalValue {
    pub fn as_text(&self) -> String {
        match self {
            FocalValue::Millimetres(value) => value.to_string(),
            FocalValue::Text(value) => value.clone(),
        }
    }
}

/// The overridable slice of a configuration. Absent fields defer to the
/// live configuration when the preset is applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetData {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub lens: Option<String>,
    #[serde(default)]
    pub focal: Option<FocalValue>,
    #[serde(default)]
    pub aperture: Option<String>,
    #[serde(default)]
    pub shutter: Option<String>,
    #[serde(default)]
    pub iso: Option<String>,
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub film: Option<String>,
    #[serde(default)]
    pub white_balance: Option<String>,
    #[serde(default)]
    pub grain: Option<String>,
    #[serde(default)]
    pub lens_characteristic: Option<String>,
    #[serde(default)]
    pub product_subgenre: Option<String>,
    #[serde(default)]
    pub lighting_setups: Option<Vec<String>>,
    #[serde(default)]
    pub vibe: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Preset {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub data: PresetData,
}

#[derive(Debug, Deserialize)]
struct PresetLibraryFile {
    presets: Vec<Preset>,
}

const EMBEDDED_LIBRARY: &str = include_str!("../../assets/presets.yaml");

static LIBRARY: Lazy<Vec<Preset>> = Lazy::new(|| match parse_library(EMBEDDED_LIBRARY) {
    Ok(presets) => {
        debug!("Loaded {} preset(s)", presets.len());
        presets
    }
    Err(err) => {
        warn!("Failed to parse preset library: {err}");
        Vec::new()
    }
});

fn parse_library(raw: &str) -> Result<Vec<Preset>> {
    let file: PresetLibraryFile =
        serde_yaml::from_str(raw).map_err(|err| anyhow!("invalid preset library YAML: {err}"))?;
    Ok(file.presets)
}

pub fn presets() -> &'static [Preset] {
    &LIBRARY
}

pub fn find(id: &str) -> Option<&'static Preset> {
    LIBRARY.iter().find(|preset| preset.id == id)
}

/// "All" plus every distinct category, in first-seen library order.
pub fn categories(presets: &[Preset]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec!["All".to_string()];
    for preset in presets {
        if seen.insert(preset.category.as_str()) {
            out.push(preset.category.clone());
        }
    }
    out
}

/// Category plus free-text filter for a preset browser. "All" matches every
/// category; the query matches case-insensitively against title or
/// description.
pub fn filter<'a>(presets: &'a [Preset], category: &str, query: &str) -> Vec<&'a Preset> {
    let query = query.trim().to_lowercase();
    presets
        .iter()
        .filter(|preset| {
            let matches_category = category == "All" || preset.category == category;
            let matches_query = query.is_empty()
                || preset.title.to_lowercase().contains(&query)
                || preset.description.to_lowercase().contains(&query);
            matches_category && matches_query
        })
        .collect()
}
