use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MATCH_THRESHOLD: f64 = 60.0;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub vocabulary_path: Option<PathBuf>,
    pub match_threshold: f64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("RESUSCAN_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let vocabulary_path = env::var("RESUSCAN_VOCABULARY_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let match_threshold = match env::var("RESUSCAN_MATCH_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_MATCH_THRESHOLD,
        };

        let max_upload_bytes = match env::var("RESUSCAN_MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                Error::Config(format!("RESUSCAN_MAX_UPLOAD_BYTES is not a byte count: {}", raw))
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            bind_addr,
            vocabulary_path,
            match_threshold,
            max_upload_bytes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            vocabulary_path: None,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn parse_threshold(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        Error::Config(format!("RESUSCAN_MATCH_THRESHOLD is not a number: {}", raw))
    })?;

    if !(0.0..=100.0).contains(&value) {
        return Err(Error::Config(format!(
            "RESUSCAN_MATCH_THRESHOLD must be between 0 and 100, got {}",
            value
        )));
    }

    Ok(value)
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub match_threshold: f64,
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            vocabulary_path: None,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            match_threshold: config.match_threshold,
            vocabulary_path: config.vocabulary_path.clone(),
        }
    }
}
