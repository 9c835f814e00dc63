use crate::catalog::options::NONE_OPTION;
use crate::studio::state::Configuration;

/// Substituted when the scene text is empty after trimming.
const SCENE_FALLBACK: &str = "A cinematic scene";

/// The four prompt variants, recomputed wholesale after every
/// configuration change. Never patched field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedPrompts {
    pub main: String,
    pub cinematic: String,
    pub gritty: String,
    pub commercial: String,
}

fn is_set(value: &str) -> bool {
    !value.is_empty() && value != NONE_OPTION
}

/// Derive all four prompt variants from the configuration. Pure and total:
/// sentinel or empty values drop out of the text instead of erroring.
pub fn derive(config: &Configuration) -> GeneratedPrompts {
    let scene = config.scene.trim();
    let scene_part = if scene.is_empty() { SCENE_FALLBACK } else { scene };
    let location_part = if config.location.is_empty() {
        String::new()
    } else {
        format!(" at {}", config.location)
    };

    let mut technical = Vec::new();
    if is_set(&config.aperture) {
        technical.push(config.aperture.clone());
    }
    if is_set(&config.shutter) {
        technical.push(config.shutter.clone());
    }
    if is_set(&config.iso) {
        technical.push(format!("ISO {}", config.iso));
    }
    let technical = technical.join(", ");

    // Sorted so that structurally equal setup sets always join identically.
    let mut setups: Vec<&str> = config
        .active_lighting_setups
        .iter()
        .map(String::as_str)
        .collect();
    setups.sort_unstable();
    let lighting_extras = setups.join(", ");

    let mut descriptors: Vec<&str> = Vec::new();
    if is_set(&config.lighting) {
        descriptors.push(&config.lighting);
    }
    if !lighting_extras.is_empty() {
        descriptors.push(&lighting_extras);
    }
    if is_set(&config.composition) {
        descriptors.push(&config.composition);
    }
    if is_set(&config.film) {
        descriptors.push(&config.film);
    }
    if is_set(&config.white_balance) {
        descriptors.push(&config.white_balance);
    }
    if is_set(&config.grain) {
        descriptors.push(&config.grain);
    }
    if is_set(&config.lens_characteristic) {
        descriptors.push(&config.lens_characteristic);
    }
    if !config.vibe.is_empty() {
        descriptors.push(&config.vibe);
    }

    // Hardware block renders camera/lens/focal verbatim, sentinel included.
    let mut blocks = vec![
        format!("{scene_part}{location_part}, {} photography", config.genre),
        format!(
            "Shot on {}, {} {}mm{}",
            config.camera,
            config.lens,
            config.focal_length,
            if technical.is_empty() {
                String::new()
            } else {
                format!(", {technical}")
            }
        ),
    ];
    if !descriptors.is_empty() {
        blocks.push(descriptors.join(", "));
    }

    let core = blocks.join(".\n\n");
    let ar_suffix = format!(" --ar {}", config.aspect_ratio);

    GeneratedPrompts {
        main: format!("{core}\n\n--style raw --s 250{ar_suffix}"),
        cinematic: format!("{core}, cinematic lighting, dramatic atmosphere\n\n--style raw{ar_suffix}"),
        gritty: format!("{core}, high contrast, grainy, raw street photography\n\n--style raw{ar_suffix}"),
        commercial: format!("{core}, commercial lighting, hyper-detailed, 8k\n\n{ar_suffix}"),
    }
}
