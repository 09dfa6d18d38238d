// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a loaded [`Config`](crate::config::Config).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Two processor entries share the same id
    DuplicateProcessorId {
        /// The duplicate processor ID
        processor_id: String,
    },
    /// A processor entry has an empty id
    EmptyProcessorId,
    /// A processor declares a zero resolution ceiling
    ZeroMaxResolution {
        processor_id: String,
    },
    /// A processor's default resolution does not parse or exceeds its ceiling
    InvalidDefaultResolution {
        processor_id: String,
        resolution: String,
        max_resolution: u32,
    },
    /// A resolution preset does not parse or exceeds the ceiling
    InvalidResolutionPreset {
        processor_id: String,
        resolution: String,
        max_resolution: u32,
    },
    /// A processor declares no output formats
    NoOutputFormats {
        processor_id: String,
    },
    /// Output formats were configured for a processor kind that has none
    FormatsNotApplicable {
        processor_id: String,
    },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValidationError::DuplicateProcessorId { processor_id } => {
                write!(f, "Duplicate processor ID: '{}'", processor_id)
            }
            ConfigValidationError::EmptyProcessorId => {
                write!(f, "Processor ID must not be empty")
            }
            ConfigValidationError::ZeroMaxResolution { processor_id } => {
                write!(
                    f,
                    "Processor '{}' declares max_resolution of 0",
                    processor_id
                )
            }
            ConfigValidationError::InvalidDefaultResolution {
                processor_id,
                resolution,
                max_resolution,
            } => {
                write!(
                    f,
                    "Processor '{}' default resolution '{}' is not a valid <width>x<height> within {}x{}",
                    processor_id, resolution, max_resolution, max_resolution
                )
            }
            ConfigValidationError::InvalidResolutionPreset {
                processor_id,
                resolution,
                max_resolution,
            } => {
                write!(
                    f,
                    "Processor '{}' resolution preset '{}' is not a valid <width>x<height> within {}x{}",
                    processor_id, resolution, max_resolution, max_resolution
                )
            }
            ConfigValidationError::FormatsNotApplicable { processor_id } => {
                write!(
                    f,
                    "Processor '{}' does not take an output format; remove 'formats'",
                    processor_id
                )
            }
            ConfigValidationError::NoOutputFormats { processor_id } => {
                write!(f, "Processor '{}' declares no output formats", processor_id)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format for '{}': expected .yaml, .yml or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ConfigValidationError>),
}

fn join_lines(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
