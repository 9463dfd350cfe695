//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `AFFECT_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::classifier::ClassifierConfig;
use crate::constants::{DEFAULT_MAX_EMOTIONS, DEFAULT_MODEL_ID, DEFAULT_SCORE_THRESHOLD};
use crate::ranking::RankingPolicy;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `AFFECT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// Unset runs the classifier in stub mode.
    pub model_path: Option<PathBuf>,

    /// Model identity reported to clients.
    pub model_id: String,

    /// Ranking threshold; scores must be strictly above it. Default: `0.1`.
    pub score_threshold: f32,

    /// Ranking cap. Default: `3`.
    pub max_emotions: usize,

    /// Allowed CORS origins; `["*"]` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            max_emotions: DEFAULT_MAX_EMOTIONS,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "AFFECT_PORT";
    const ENV_BIND_ADDR: &'static str = "AFFECT_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "AFFECT_MODEL_PATH";
    const ENV_MODEL_ID: &'static str = "AFFECT_MODEL_ID";
    const ENV_SCORE_THRESHOLD: &'static str = "AFFECT_SCORE_THRESHOLD";
    const ENV_MAX_EMOTIONS: &'static str = "AFFECT_MAX_EMOTIONS";
    const ENV_CORS_ORIGINS: &'static str = "AFFECT_CORS_ORIGINS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let model_id = Self::parse_string_from_env(Self::ENV_MODEL_ID, defaults.model_id);
        let score_threshold = Self::parse_threshold_from_env(defaults.score_threshold)?;
        let max_emotions = Self::parse_max_emotions_from_env(defaults.max_emotions)?;
        let cors_origins = Self::parse_list_from_env(Self::ENV_CORS_ORIGINS, defaults.cors_origins);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            model_id,
            score_threshold,
            max_emotions,
            cors_origins,
        })
    }

    /// Validates paths and ranking bounds (does not load anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.model_id.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_MODEL_ID,
            });
        }

        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.score_threshold.to_string(),
            });
        }

        if self.max_emotions == 0 {
            return Err(ConfigError::InvalidMaxEmotions {
                value: self.max_emotions.to_string(),
            });
        }

        if self.cors_origins.is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_CORS_ORIGINS,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Classifier settings derived from this configuration.
    pub fn classifier_config(&self) -> ClassifierConfig {
        let config = match &self.model_path {
            Some(path) => ClassifierConfig::new(path.clone()),
            None => ClassifierConfig::stub(),
        };
        config.with_model_id(self.model_id.clone())
    }

    /// Ranking policy derived from this configuration.
    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy::new(self.score_threshold, self.max_emotions)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_threshold_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_SCORE_THRESHOLD) {
            Ok(value) => {
                let threshold: f32 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::InvalidThreshold { value });
                }

                Ok(threshold)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_max_emotions_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_EMOTIONS) {
            Ok(value) => {
                let max: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidMaxEmotions {
                            value: value.clone(),
                        })?;

                if max == 0 {
                    return Err(ConfigError::InvalidMaxEmotions { value });
                }

                Ok(max)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_list_from_env(var_name: &str, default: Vec<String>) -> Vec<String> {
        match env::var(var_name) {
            Ok(value) => {
                let items: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if items.is_empty() { default } else { items }
            }
            Err(_) => default,
        }
    }
}
