// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_BIND_ADDRESS, DEFAULT_LOG_LEVEL, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_UPLOAD_DIR,
};
use crate::config::ProcessorKind;
use crate::errors::ConfigError;
use crate::model::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for the asset forge service.
///
/// Every section is optional; an empty file yields the same service as
/// [`Config::default`].
///
/// # Example
/// ```yaml
/// server:
///   bind: 127.0.0.1:8080
///   upload_dir: /var/tmp/forge
///   max_upload_bytes: 8388608
/// logging:
///   level: debug
///   format: json
/// processors:
///   - id: art
///     kind: art
///     formats: [glb]
///   - id: food
///     kind: food
///     max_resolution: 1024
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_processors")]
    pub processors: Vec<ProcessorConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            processors: default_processors(),
        }
    }
}

/// HTTP listener and upload storage options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Directory holding uploads while they are being processed
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Configuration for a single registered processor.
///
/// Optional fields override the kind's built-in descriptor values.
///
/// # Example
/// ```yaml
/// id: "art"
/// kind: art
/// max_resolution: 2048
/// default_resolution: "1024x1024"
/// resolution_presets: ["512x512", "1024x1024"]
/// formats: [obj, glb]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProcessorConfig {
    pub id: String,
    pub kind: ProcessorKind,
    #[serde(default)]
    pub max_resolution: Option<u32>,
    #[serde(default)]
    pub default_resolution: Option<String>,
    #[serde(default)]
    pub resolution_presets: Option<Vec<String>>,
    #[serde(default)]
    pub formats: Option<Vec<OutputFormat>>,
}

impl ProcessorConfig {
    /// A processor entry using every built-in default for `kind`.
    pub fn builtin(id: impl Into<String>, kind: ProcessorKind) -> Self {
        Self {
            id: id.into(),
            kind,
            max_resolution: None,
            default_resolution: None,
            resolution_presets: None,
            formats: None,
        }
    }
}

fn default_processors() -> Vec<ProcessorConfig> {
    vec![
        ProcessorConfig::builtin("art", ProcessorKind::Art),
        ProcessorConfig::builtin("food", ProcessorKind::Food),
        ProcessorConfig::builtin("general", ProcessorKind::General),
    ]
}

/// Load a config from a YAML or TOML file, chosen by extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("toml") => Ok(toml::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and validate a config file.
///
/// All validation problems are reported together in
/// [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
