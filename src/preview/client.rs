use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::catalog::presets::Preset;
use crate::config::CONFIG;
use crate::utils::http::get_http_client;

/// The single failure kind a sample-preview request can surface. Never
/// fatal for the caller; the affected preset simply shows no preview.
#[derive(Debug, thiserror::Error)]
#[error("Sample preview generation failed: {0}")]
pub struct PreviewError(pub String);

/// An inline image returned by the provider, carried bit-exact: `data` is
/// the provider's base64 payload, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub mime_type: String,
    pub data: String,
}

impl PreviewImage {
    /// Self-contained payload ready for direct display.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn bytes(&self) -> Result<Vec<u8>, PreviewError> {
        general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|err| PreviewError(format!("invalid base64 image payload: {err}")))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        #[allow(dead_code)]
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Preview prompt for a preset card.
pub fn sample_prompt(preset: &Preset) -> String {
    format!(
        "Artistic photography sample: {}. {}. High quality, photorealistic.",
        preset.description,
        preset.data.vibe.as_deref().unwrap_or_default()
    )
}

fn redact_api_key(text: &str) -> String {
    let key = CONFIG.gemini_api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn build_image_config() -> Option<Value> {
    let mut map = Map::new();

    let aspect_ratio = CONFIG.preview_aspect_ratio.trim();
    if !aspect_ratio.is_empty() {
        map.insert("aspectRatio".to_string(), json!(aspect_ratio));
    }

    let image_size = CONFIG.preview_image_size.trim();
    if !image_size.is_empty() {
        map.insert("imageSize".to_string(), json!(image_size));
    }

    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    }
}

fn build_payload(prompt: &str) -> Value {
    let mut generation_config = json!({
        "responseModalities": ["TEXT", "IMAGE"]
    });
    if let Some(image_config) = build_image_config() {
        if let Some(config_object) = generation_config.as_object_mut() {
            config_object.insert("imageConfig".to_string(), image_config);
        }
    }

    json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": generation_config,
    })
}

fn extract_preview(response: GenerateResponse) -> Option<PreviewImage> {
    for candidate in response.candidates.unwrap_or_default() {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts.unwrap_or_default() {
            if let Part::InlineData { inline_data } = part {
                if inline_data.mime_type.starts_with("image/") {
                    return Some(PreviewImage {
                        mime_type: inline_data.mime_type,
                        data: inline_data.data,
                    });
                }
            }
        }
    }
    None
}

/// Fetch one AI-generated sample image for the prompt. A single attempt:
/// any failure is terminal for this request and reported to the caller,
/// never retried here.
pub async fn generate_sample_preview(prompt: &str) -> Result<PreviewImage, PreviewError> {
    let client = get_http_client();
    let model = &CONFIG.gemini_image_model;
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, CONFIG.gemini_api_key
    );
    let payload = build_payload(prompt);

    debug!(target: "preview.gemini", model = %model, "Requesting sample preview");

    let response = client
        .post(&url)
        .timeout(Duration::from_secs(CONFIG.preview_timeout_secs))
        .json(&payload)
        .send()
        .await
        .map_err(|err| {
            let text = redact_api_key(&err.to_string());
            warn!(
                "Preview request failed to send: {} (timeout={}, connect={})",
                text,
                err.is_timeout(),
                err.is_connect()
            );
            PreviewError(text)
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(
            "Preview request failed: status={}, body={}",
            status,
            truncate_for_log(&redact_api_key(&body), 800)
        );
        return Err(PreviewError(format!("provider returned status {status}")));
    }

    let parsed = response
        .json::<GenerateResponse>()
        .await
        .map_err(|err| PreviewError(redact_api_key(&err.to_string())))?;

    extract_preview(parsed)
        .ok_or_else(|| PreviewError(format!("no image returned by model {model}")))
}
