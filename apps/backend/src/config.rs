//! Service configuration loaded from environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use flashcard_core::chunker::DEFAULT_CHUNK_SIZE;
use thiserror::Error;

use crate::services::generation::RemoteSettings;

/// Default Hugging Face inference endpoint.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-large";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration.
///
/// Env vars (all optional):
/// - HOST, PORT: listen address
/// - HF_API_TOKEN: enables remote generation
/// - HF_MODEL_URL: inference endpoint
/// - FILLER_TABLE_PATH: JSON filler table replacing the built-in one
/// - MAX_CARDS, MIN_CONTENT_CHARS: request limits
/// - CHUNK_SIZE, PROBE_ATTEMPTS, PROBE_INTERVAL_SECS, REQUEST_TIMEOUT_SECS, CALL_DELAY_MS
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub hf_api_token: Option<String>,
    pub hf_model_url: String,
    pub filler_table_path: Option<PathBuf>,
    pub max_cards: usize,
    pub min_content_chars: usize,
    pub remote: RemoteSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            hf_api_token: None,
            hf_model_url: DEFAULT_MODEL_URL.to_string(),
            filler_table_path: None,
            max_cards: 20,
            min_content_chars: 50,
            remote: RemoteSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let remote = defaults.remote.clone();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let probe_interval = parse_or(&get, "PROBE_INTERVAL_SECS", remote.probe_interval.as_secs())?;
        let probe_attempts = parse_or(&get, "PROBE_ATTEMPTS", remote.probe_attempts)?;

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or(&get, "PORT", defaults.port)?,
            hf_api_token: get("HF_API_TOKEN"),
            hf_model_url: get("HF_MODEL_URL").unwrap_or(defaults.hf_model_url),
            filler_table_path: get("FILLER_TABLE_PATH").map(PathBuf::from),
            max_cards: parse_or(&get, "MAX_CARDS", defaults.max_cards)?,
            min_content_chars: parse_or(&get, "MIN_CONTENT_CHARS", defaults.min_content_chars)?,
            remote: RemoteSettings {
                chunk_size: parse_or(&get, "CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?,
                probe_attempts,
                probe_interval: Duration::from_secs(probe_interval),
                max_probe_wait: Duration::from_secs(probe_interval * probe_attempts as u64),
                request_timeout: Duration::from_secs(parse_or(
                    &get,
                    "REQUEST_TIMEOUT_SECS",
                    remote.request_timeout.as_secs(),
                )?),
                call_delay: Duration::from_millis(parse_or(
                    &get,
                    "CALL_DELAY_MS",
                    remote.call_delay.as_millis() as u64,
                )?),
            },
        })
    }

    /// Listen address, e.g. "0.0.0.0:3000".
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
