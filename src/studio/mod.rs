pub mod merge;
pub mod prompt;
pub mod state;

pub use merge::{apply_preset, random_preset};
pub use prompt::{derive, GeneratedPrompts};
pub use state::{AspectRatio, Configuration, TargetModel};

use crate::catalog::presets::Preset;

/// A single update intent from the surface, one variant per directly
/// settable control. Preset application and lighting-setup toggling have
/// their own primitives on `StudioSession`.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Scene(String),
    Location(String),
    Datetime(String),
    Genre(String),
    Camera(String),
    Lens(String),
    FocalLength(String),
    Aperture(String),
    Shutter(String),
    Iso(String),
    Film(String),
    WhiteBalance(String),
    Grain(String),
    LensCharacteristic(String),
    Lighting(String),
    Composition(String),
    ProductSubgenre(String),
    AspectRatio(AspectRatio),
    TargetModel(TargetModel),
}

/// Owns the live configuration and its derived prompts. Every mutation
/// primitive recomputes all four prompt variants before returning, so a
/// caller never observes prompts lagging behind the configuration.
#[derive(Debug, Clone)]
pub struct StudioSession {
    config: Configuration,
    prompts: GeneratedPrompts,
}

impl StudioSession {
    pub fn new() -> Self {
        let config = Configuration::default();
        let prompts = derive(&config);
        StudioSession { config, prompts }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn prompts(&self) -> &GeneratedPrompts {
        &self.prompts
    }

    pub fn apply(&mut self, change: ControlChange) {
        match change {
            ControlChange::Scene(value) => self.config.scene = value,
            ControlChange::Location(value) => self.config.location = value,
            ControlChange::Datetime(value) => self.config.datetime = value,
            // Changing genre narrows the valid lens list but deliberately
            // leaves the current lens untouched, even when it no longer
            // belongs to the new genre's list.
            ControlChange::Genre(value) => self.config.genre = value,
            ControlChange::Camera(value) => self.config.camera = value,
            ControlChange::Lens(value) => self.config.lens = value,
            ControlChange::FocalLength(value) => self.config.focal_length = value,
            ControlChange::Aperture(value) => self.config.aperture = value,
            ControlChange::Shutter(value) => self.config.shutter = value,
            ControlChange::Iso(value) => self.config.iso = value,
            ControlChange::Film(value) => self.config.film = value,
            ControlChange::WhiteBalance(value) => self.config.white_balance = value,
            ControlChange::Grain(value) => self.config.grain = value,
            ControlChange::LensCharacteristic(value) => self.config.lens_characteristic = value,
            ControlChange::Lighting(value) => self.config.lighting = value,
            ControlChange::Composition(value) => self.config.composition = value,
            ControlChange::ProductSubgenre(value) => self.config.product_subgenre = value,
            ControlChange::AspectRatio(value) => self.config.aspect_ratio = value,
            ControlChange::TargetModel(value) => self.config.target_model = value,
        }
        self.recompute();
    }

    /// Symmetric membership toggle: add the phrase if absent, remove it if
    /// present.
    pub fn toggle_lighting_setup(&mut self, phrase: &str) {
        if !self.config.active_lighting_setups.remove(phrase) {
            self.config
                .active_lighting_setups
                .insert(phrase.to_string());
        }
        self.recompute();
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.config = merge::apply_preset(&self.config, preset);
        self.recompute();
    }

    /// Pick one preset uniformly at random and apply it. Returns the
    /// chosen preset, or `None` for an empty library.
    pub fn randomize<'a>(&mut self, presets: &'a [Preset]) -> Option<&'a Preset> {
        let preset = merge::random_preset(presets)?;
        self.apply_preset(preset);
        Some(preset)
    }

    fn recompute(&mut self) {
        self.prompts = derive(&self.config);
    }
}

impl Default for StudioSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets;

    #[test]
    fn prompts_reflect_every_mutation_before_the_next_read() {
        let mut session = StudioSession::new();
        assert!(session.prompts().main.starts_with("A cinematic scene"));

        session.apply(ControlChange::Scene("A market at dawn".to_string()));
        assert!(session.prompts().main.starts_with("A market at dawn"));

        session.apply(ControlChange::AspectRatio(AspectRatio::Square));
        assert!(session.prompts().main.ends_with(" --ar 1:1"));

        session.toggle_lighting_setup("rim light");
        assert!(session.prompts().main.contains("rim light"));
    }

    #[test]
    fn toggling_a_setup_twice_restores_the_configuration() {
        let mut session = StudioSession::new();
        let before = session.config().clone();

        session.toggle_lighting_setup("fog machine");
        assert!(session
            .config()
            .active_lighting_setups
            .contains("fog machine"));

        session.toggle_lighting_setup("fog machine");
        assert_eq!(*session.config(), before);
    }

    #[test]
    fn genre_change_leaves_the_lens_untouched() {
        let mut session = StudioSession::new();
        session.apply(ControlChange::Genre("product".to_string()));
        assert_eq!(session.config().lens, "50mm prime");
    }

    #[test]
    fn applying_a_preset_updates_provenance_and_prompts() {
        let mut session = StudioSession::new();
        let preset = presets::find("tokyo-neon-noir").expect("library preset");

        session.apply_preset(preset);
        assert_eq!(session.config().active_preset_id, "tokyo-neon-noir");
        assert_eq!(session.config().photographer_style, preset.title);
        assert!(session.prompts().main.contains("Neon glow"));
        assert!(session.prompts().main.contains("rain-slicked cyberpunk noir"));
    }

    #[test]
    fn randomize_applies_some_library_preset() {
        let mut session = StudioSession::new();
        let library = presets::presets();

        let chosen = session.randomize(library).expect("non-empty library");
        assert_eq!(session.config().active_preset_id, chosen.id);
        assert!(library.iter().any(|preset| preset.id == chosen.id));

        assert!(session.randomize(&[]).is_none());
    }
}
