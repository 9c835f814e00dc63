pub mod cache;
pub mod client;

pub use cache::{PreviewCache, PreviewSlot};
pub use client::{generate_sample_preview, sample_prompt, PreviewError, PreviewImage};
