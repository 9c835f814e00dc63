//! Core engine of a photography prompt configurator: a structured
//! configuration of camera, exposure, lighting and film parameters, a
//! preset merge engine, a deterministic four-variant prompt derivation
//! engine, the static option/preset catalog, and a thin async client for
//! AI-generated preset sample previews. The crate owns no UI; a surface
//! embeds it and feeds it update intents.

pub mod catalog;
pub mod config;
pub mod preview;
pub mod studio;
pub mod utils;

pub use catalog::presets::Preset;
pub use studio::{
    AspectRatio, Configuration, ControlChange, GeneratedPrompts, StudioSession, TargetModel,
};
