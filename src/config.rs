use std::env;

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_image_model: String,
    pub preview_aspect_ratio: String,
    pub preview_image_size: String,
    pub preview_timeout_secs: u64,
    pub http_timeout_secs: u64,
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

impl Config {
    fn load() -> Self {
        dotenvy::dotenv().ok();

        Config {
            log_level: env_string("LOG_LEVEL", "info"),
            gemini_api_key: env_string("GEMINI_API_KEY", ""),
            gemini_image_model: env_string("GEMINI_IMAGE_MODEL", "gemini-2.5-flash-image"),
            // Square sample cards in the preset browser.
            preview_aspect_ratio: env_string("PREVIEW_ASPECT_RATIO", "1:1"),
            preview_image_size: env_string("PREVIEW_IMAGE_SIZE", ""),
            preview_timeout_secs: env_u64("PREVIEW_TIMEOUT_SECS", 90),
            http_timeout_secs: env_u64("HTTP_TIMEOUT_SECS", 30),
        }
    }
}
