use std::path::PathBuf;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON record to render; the built-in record when unset.
    pub record_path: Option<PathBuf>,
    pub output_root: PathBuf,
    /// Artifact base name; derived from the candidate's name when unset.
    pub base_name: Option<String>,
    pub organize: bool,
    pub organize_sources: Vec<PathBuf>,
    pub organize_dest: PathBuf,
    pub prefix: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output_root = var("CVGEN_OUTPUT_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let organize = match var("CVGEN_ORGANIZE") {
            Some(raw) => parse_bool("CVGEN_ORGANIZE", &raw)?,
            None => false,
        };

        let organize_sources = match var("CVGEN_ORGANIZE_SOURCES") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect(),
            None => vec![output_root.clone()],
        };

        let organize_dest = var("CVGEN_ORGANIZE_DEST")
            .map(PathBuf::from)
            .unwrap_or_else(|| output_root.join("ALL_CV_FILES"));

        Ok(Config {
            record_path: var("CVGEN_RECORD").map(PathBuf::from),
            base_name: var("CVGEN_BASE_NAME"),
            organize,
            organize_sources,
            organize_dest,
            prefix: var("CVGEN_PREFIX").unwrap_or_else(|| "cv_".to_string()),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            output_root,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "'{key}' must be a boolean, got '{raw}'"
        ))),
    }
}
