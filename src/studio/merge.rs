use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::catalog::presets::Preset;
use crate::studio::state::Configuration;

fn override_with(current: &str, candidate: Option<&str>) -> String {
    match candidate {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current.to_string(),
    }
}

/// Reconcile a preset into the live configuration. Preset values win
/// field-by-field where the preset defines them; everything else keeps the
/// user's current choice. Exceptions, always overwritten regardless of what
/// the preset data carries:
///
/// - `active_lighting_setups` is replaced wholesale (empty when the preset
///   names none), never unioned with the current set,
/// - `vibe` is taken from the preset or cleared,
/// - the provenance fields (`active_preset_id`, `photographer_style`,
///   `preset_description`) come from the preset's metadata.
pub fn apply_preset(current: &Configuration, preset: &Preset) -> Configuration {
    let data = &preset.data;

    let focal_length = data
        .focal
        .as_ref()
        .map(|focal| focal.as_text())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| current.focal_length.clone());

    Configuration {
        scene: current.scene.clone(),
        location: current.location.clone(),
        datetime: current.datetime.clone(),
        genre: override_with(&current.genre, data.genre.as_deref()),
        camera: override_with(&current.camera, data.camera.as_deref()),
        lens: override_with(&current.lens, data.lens.as_deref()),
        focal_length,
        aperture: override_with(&current.aperture, data.aperture.as_deref()),
        shutter: override_with(&current.shutter, data.shutter.as_deref()),
        iso: override_with(&current.iso, data.iso.as_deref()),
        film: override_with(&current.film, data.film.as_deref()),
        white_balance: override_with(&current.white_balance, data.white_balance.as_deref()),
        grain: override_with(&current.grain, data.grain.as_deref()),
        lens_characteristic: override_with(
            &current.lens_characteristic,
            data.lens_characteristic.as_deref(),
        ),
        lighting: override_with(&current.lighting, data.lighting.as_deref()),
        active_lighting_setups: data
            .lighting_setups
            .as_ref()
            .map(|setups| setups.iter().cloned().collect::<HashSet<_>>())
            .unwrap_or_default(),
        composition: override_with(&current.composition, data.composition.as_deref()),
        product_subgenre: override_with(&current.product_subgenre, data.product_subgenre.as_deref()),
        aspect_ratio: current.aspect_ratio,
        target_model: current.target_model,
        active_preset_id: preset.id.clone(),
        photographer_style: preset.title.clone(),
        preset_description: preset.description.clone(),
        vibe: data.vibe.clone().unwrap_or_default(),
    }
}

/// Uniform choice over the whole library; the active preset is not
/// excluded.
pub fn random_preset(presets: &[Preset]) -> Option<&Preset> {
    presets.choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets::{FocalValue, PresetData};

    fn preset(id: &str, data: PresetData) -> Preset {
        Preset {
            id: id.to_string(),
            title: format!("{id} title"),
            description: format!("{id} description"),
            category: "Test".to_string(),
            data,
        }
    }

    #[test]
    fn defined_fields_win_and_absent_fields_are_preserved() {
        let current = Configuration {
            scene: "A quiet harbor".to_string(),
            camera: "Leica M11".to_string(),
            film: "Kodak Gold 200".to_string(),
            ..Configuration::default()
        };
        let preset = preset(
            "street-kit",
            PresetData {
                genre: Some("street".to_string()),
                lighting: Some("Hard flash".to_string()),
                focal: Some(FocalValue::Millimetres(35)),
                ..PresetData::default()
            },
        );

        let merged = apply_preset(&current, &preset);
        assert_eq!(merged.genre, "street");
        assert_eq!(merged.lighting, "Hard flash");
        assert_eq!(merged.focal_length, "35");
        // Untouched by the preset data:
        assert_eq!(merged.scene, "A quiet harbor");
        assert_eq!(merged.camera, "Leica M11");
        assert_eq!(merged.film, "Kodak Gold 200");
        assert_eq!(merged.aperture, current.aperture);
        assert_eq!(merged.aspect_ratio, current.aspect_ratio);
        assert_eq!(merged.target_model, current.target_model);
    }

    #[test]
    fn empty_preset_values_defer_to_current() {
        let current = Configuration::default();
        let preset = preset(
            "hollow",
            PresetData {
                camera: Some(String::new()),
                focal: Some(FocalValue::Text(String::new())),
                ..PresetData::default()
            },
        );

        let merged = apply_preset(&current, &preset);
        assert_eq!(merged.camera, current.camera);
        assert_eq!(merged.focal_length, current.focal_length);
    }

    #[test]
    fn lighting_setups_are_replaced_not_unioned() {
        let mut current = Configuration::default();
        current
            .active_lighting_setups
            .insert("fog machine".to_string());

        let preset = preset(
            "rim-only",
            PresetData {
                genre: Some("street".to_string()),
                lighting: Some("Hard flash".to_string()),
                lighting_setups: Some(vec!["rim light".to_string()]),
                ..PresetData::default()
            },
        );

        let merged = apply_preset(&current, &preset);
        assert_eq!(
            merged.active_lighting_setups,
            HashSet::from(["rim light".to_string()])
        );
    }

    #[test]
    fn presets_without_setups_clear_the_toggle_set() {
        let mut current = Configuration::default();
        current
            .active_lighting_setups
            .insert("fog machine".to_string());

        let merged = apply_preset(&current, &preset("bare", PresetData::default()));
        assert!(merged.active_lighting_setups.is_empty());
    }

    #[test]
    fn vibe_and_provenance_always_come_from_the_preset() {
        let current = Configuration {
            vibe: "stale vibe".to_string(),
            photographer_style: "Old Style".to_string(),
            ..Configuration::default()
        };

        let merged = apply_preset(&current, &preset("bare", PresetData::default()));
        assert!(merged.vibe.is_empty());
        assert_eq!(merged.active_preset_id, "bare");
        assert_eq!(merged.photographer_style, "bare title");
        assert_eq!(merged.preset_description, "bare description");
    }

    #[test]
    fn applying_the_same_preset_twice_is_idempotent() {
        let current = Configuration {
            scene: "Bridge at dusk".to_string(),
            ..Configuration::default()
        };
        let preset = preset(
            "noir",
            PresetData {
                lighting: Some("Neon glow".to_string()),
                lighting_setups: Some(vec!["atmospheric smoke".to_string()]),
                vibe: Some("rainy noir".to_string()),
                ..PresetData::default()
            },
        );

        let once = apply_preset(&current, &preset);
        let twice = apply_preset(&once, &preset);
        assert_eq!(once, twice);
    }

    #[test]
    fn random_preset_draws_from_the_given_library() {
        assert!(random_preset(&[]).is_none());

        let library = vec![
            preset("a", PresetData::default()),
            preset("b", PresetData::default()),
        ];
        for _ in 0..16 {
            let chosen = random_preset(&library).expect("non-empty library");
            assert!(library.iter().any(|preset| preset.id == chosen.id));
        }
    }
}
