pub mod options;
pub mod presets;

pub use options::{lenses_for_genre, Control, LightingSetup, NONE_OPTION};
pub use presets::{FocalValue, Preset, PresetData};
