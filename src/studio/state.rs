use std::collections::HashSet;
use std::fmt;

use crate::catalog::options::NONE_OPTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Square,
    Widescreen,
    Vertical,
    UltraWide,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::UltraWide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::UltraWide => "21:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which downstream image model the prompt is destined for. Carried as
/// session state for the surface's tabs; derivation currently emits the
/// same text for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetModel {
    Midjourney,
    Flux,
    Dalle,
}

impl TargetModel {
    pub const ALL: [TargetModel; 3] = [
        TargetModel::Midjourney,
        TargetModel::Flux,
        TargetModel::Dalle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetModel::Midjourney => "midjourney",
            TargetModel::Flux => "flux",
            TargetModel::Dalle => "dalle",
        }
    }
}

impl fmt::Display for TargetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The live record of every user-selected photographic parameter. Single
/// source of truth; mutated only through `StudioSession`.
///
/// Option-backed fields hold either the "None" sentinel or a catalog value.
/// The last four fields are provenance written by preset application, not
/// directly user-editable.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub scene: String,
    pub location: String,
    pub datetime: String,

    pub genre: String,
    pub camera: String,
    pub lens: String,
    pub focal_length: String,

    pub aperture: String,
    pub shutter: String,
    pub iso: String,

    pub film: String,
    pub white_balance: String,
    pub grain: String,
    pub lens_characteristic: String,

    pub lighting: String,
    pub active_lighting_setups: HashSet<String>,

    pub composition: String,
    pub product_subgenre: String,

    pub aspect_ratio: AspectRatio,
    pub target_model: TargetModel,

    pub active_preset_id: String,
    pub photographer_style: String,
    pub preset_description: String,
    pub vibe: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            scene: String::new(),
            location: String::new(),
            datetime: String::new(),
            genre: "portrait".to_string(),
            camera: NONE_OPTION.to_string(),
            lens: "50mm prime".to_string(),
            focal_length: "50".to_string(),
            aperture: "f/2.8".to_string(),
            shutter: "1/125s".to_string(),
            iso: "100".to_string(),
            film: NONE_OPTION.to_string(),
            white_balance: NONE_OPTION.to_string(),
            grain: NONE_OPTION.to_string(),
            lens_characteristic: NONE_OPTION.to_string(),
            lighting: NONE_OPTION.to_string(),
            active_lighting_setups: HashSet::new(),
            composition: "Rule of Thirds".to_string(),
            product_subgenre: NONE_OPTION.to_string(),
            aspect_ratio: AspectRatio::Widescreen,
            target_model: TargetModel::Midjourney,
            active_preset_id: "none".to_string(),
            photographer_style: String::new(),
            preset_description: String::new(),
            vibe: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_matches_session_start_values() {
        let config = Configuration::default();
        assert_eq!(config.genre, "portrait");
        assert_eq!(config.lens, "50mm prime");
        assert_eq!(config.focal_length, "50");
        assert_eq!(config.aperture, "f/2.8");
        assert_eq!(config.shutter, "1/125s");
        assert_eq!(config.iso, "100");
        assert_eq!(config.composition, "Rule of Thirds");
        assert_eq!(config.aspect_ratio, AspectRatio::Widescreen);
        assert_eq!(config.target_model, TargetModel::Midjourney);
        assert_eq!(config.active_preset_id, "none");
        assert!(config.scene.is_empty());
        assert!(config.photographer_style.is_empty());
        assert!(config.active_lighting_setups.is_empty());
    }

    #[test]
    fn aspect_ratios_render_as_their_ratio_text() {
        let rendered: Vec<&str> = AspectRatio::ALL.iter().map(|ar| ar.as_str()).collect();
        assert_eq!(rendered, vec!["1:1", "16:9", "9:16", "21:9"]);
    }
}
