use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::warn;

use crate::catalog::presets::Preset;
use crate::preview::client::{generate_sample_preview, sample_prompt, PreviewError};

/// Outcome of claiming the session's single request slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSlot {
    /// A preview for this preset is already cached.
    Cached(String),
    /// Another request is in flight; the caller should simply do nothing.
    Busy,
    /// The slot is claimed for this preset; follow up with `complete` or
    /// `fail`.
    Claimed,
}

#[derive(Default)]
struct CacheInner {
    images: HashMap<String, String>,
    in_flight: Option<String>,
}

/// Session-scoped store of generated preset previews. At most one request
/// is in flight at a time, session-wide; completed previews are keyed by
/// preset id. Holds no reference to the configuration or its prompts.
#[derive(Default)]
pub struct PreviewCache {
    inner: Mutex<CacheInner>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, preset_id: &str) -> Option<String> {
        self.inner.lock().images.get(preset_id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().in_flight.is_some()
    }

    /// Claim the request slot for a preset.
    pub fn begin(&self, preset_id: &str) -> PreviewSlot {
        let mut inner = self.inner.lock();
        if let Some(uri) = inner.images.get(preset_id) {
            return PreviewSlot::Cached(uri.clone());
        }
        if inner.in_flight.is_some() {
            return PreviewSlot::Busy;
        }
        inner.in_flight = Some(preset_id.to_string());
        PreviewSlot::Claimed
    }

    /// Store a finished preview and release the slot.
    pub fn complete(&self, preset_id: &str, data_uri: String) {
        let mut inner = self.inner.lock();
        inner.images.insert(preset_id.to_string(), data_uri);
        if inner.in_flight.as_deref() == Some(preset_id) {
            inner.in_flight = None;
        }
    }

    /// Release the slot without storing anything.
    pub fn fail(&self, preset_id: &str) {
        let mut inner = self.inner.lock();
        if inner.in_flight.as_deref() == Some(preset_id) {
            inner.in_flight = None;
        }
    }

    /// Fetch (or reuse) the sample preview for a preset. Returns the data
    /// URI, `Ok(None)` when another request already holds the slot, or the
    /// terminal error of a failed generation. The lock is never held across
    /// the network call.
    pub async fn request(&self, preset: &Preset) -> Result<Option<String>, PreviewError> {
        match self.begin(&preset.id) {
            PreviewSlot::Cached(uri) => return Ok(Some(uri)),
            PreviewSlot::Busy => return Ok(None),
            PreviewSlot::Claimed => {}
        }

        match generate_sample_preview(&sample_prompt(preset)).await {
            Ok(image) => {
                let uri = image.data_uri();
                self.complete(&preset.id, uri.clone());
                Ok(Some(uri))
            }
            Err(err) => {
                warn!("Preview generation failed for preset '{}': {err}", preset.id);
                self.fail(&preset.id);
                Err(err)
            }
        }
    }
}
