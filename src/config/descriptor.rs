// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static capability metadata for each processor type.
//!
//! A [`ProcessorDescriptor`] is built once at startup from a
//! [`ProcessorConfig`] and never changes afterwards. It drives both settings
//! validation and the capability discovery endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::consts::{DEFAULT_MAX_RESOLUTION, DEFAULT_RESOLUTION_SIDE};
use crate::config::ProcessorConfig;
use crate::errors::ConfigValidationError;
use crate::model::{
    ArtStyle, DetectionMode, MetadataType, OptimizationMode, OptionValue, OutputFormat,
    Resolution,
};

pub const RESOLUTION_KEY: &str = "resolution";
pub const STYLE_KEY: &str = "style";
pub const FORMAT_KEY: &str = "format";
pub const DETECTION_KEY: &str = "detection";
pub const METADATA_KEY: &str = "metadata";
pub const OPTIMIZATION_KEY: &str = "optimization";

/// The processor implementations this service ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    Art,
    Food,
    General,
}

impl ProcessorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessorKind::Art => "art",
            ProcessorKind::Food => "food",
            ProcessorKind::General => "general",
        }
    }

    fn takes_format(self) -> bool {
        !matches!(self, ProcessorKind::Food)
    }

    fn builtin_presets(self) -> &'static [u32] {
        match self {
            ProcessorKind::Food => &[512, 1024],
            ProcessorKind::Art | ProcessorKind::General => &[512, 1024, 2048],
        }
    }
}

/// An enumerated settings key: the accepted values and the one used when the
/// key is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    pub allowed: Vec<String>,
    pub default: String,
}

impl OptionSpec {
    fn of<T: OptionValue>(default: T) -> Self {
        Self {
            allowed: T::names(),
            default: default.as_str().to_string(),
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        self.allowed.iter().any(|v| v == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessorDescriptor {
    pub id: String,
    pub kind: ProcessorKind,
    pub supported_formats: Vec<OutputFormat>,
    /// Enumerated settings keys, e.g. `style` or `detection`
    pub options: BTreeMap<String, OptionSpec>,
    /// Ceiling applied to both width and height
    pub max_resolution: u32,
    pub default_resolution: Resolution,
    /// Suggested resolutions advertised to clients
    pub resolution_presets: Vec<Resolution>,
}

impl ProcessorDescriptor {
    /// Descriptor with every built-in default for `kind`.
    #[cfg(test)]
    pub fn builtin(id: impl Into<String>, kind: ProcessorKind) -> Self {
        let config = ProcessorConfig::builtin(id, kind);
        // built-in values are always consistent
        match Self::from_config(&config) {
            Ok(descriptor) => descriptor,
            Err(errors) => unreachable!("built-in descriptor is invalid: {:?}", errors),
        }
    }

    /// Build a descriptor, applying `config` overrides on top of the kind's
    /// built-in values. Every inconsistency is reported.
    pub fn from_config(config: &ProcessorConfig) -> Result<Self, Vec<ConfigValidationError>> {
        let mut errors = Vec::new();
        let id = config.id.clone();
        let kind = config.kind;

        let max_resolution = config.max_resolution.unwrap_or(DEFAULT_MAX_RESOLUTION);
        if max_resolution == 0 {
            errors.push(ConfigValidationError::ZeroMaxResolution {
                processor_id: id.clone(),
            });
        }

        let default_resolution = match &config.default_resolution {
            Some(raw) => match Resolution::parse(raw).filter(|r| r.fits_within(max_resolution)) {
                Some(resolution) => resolution,
                None => {
                    errors.push(ConfigValidationError::InvalidDefaultResolution {
                        processor_id: id.clone(),
                        resolution: raw.clone(),
                        max_resolution,
                    });
                    Resolution::square(1)
                }
            },
            None => Resolution::square(DEFAULT_RESOLUTION_SIDE.min(max_resolution).max(1)),
        };

        let resolution_presets = match &config.resolution_presets {
            Some(raw_presets) => {
                let mut presets = Vec::with_capacity(raw_presets.len());
                for raw in raw_presets {
                    match Resolution::parse(raw).filter(|r| r.fits_within(max_resolution)) {
                        Some(resolution) => presets.push(resolution),
                        None => errors.push(ConfigValidationError::InvalidResolutionPreset {
                            processor_id: id.clone(),
                            resolution: raw.clone(),
                            max_resolution,
                        }),
                    }
                }
                presets
            }
            None => kind
                .builtin_presets()
                .iter()
                .copied()
                .filter(|side| *side <= max_resolution)
                .map(Resolution::square)
                .collect(),
        };

        let supported_formats = if kind.takes_format() {
            let formats = config
                .formats
                .clone()
                .unwrap_or_else(|| OutputFormat::ALL.to_vec());
            if formats.is_empty() {
                errors.push(ConfigValidationError::NoOutputFormats {
                    processor_id: id.clone(),
                });
            }
            formats
        } else {
            if config.formats.is_some() {
                errors.push(ConfigValidationError::FormatsNotApplicable {
                    processor_id: id.clone(),
                });
            }
            vec![OutputFormat::Obj]
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut options = BTreeMap::new();
        match kind {
            ProcessorKind::Art => {
                options.insert(STYLE_KEY.to_string(), OptionSpec::of(ArtStyle::Realistic));
            }
            ProcessorKind::Food => {
                options.insert(
                    DETECTION_KEY.to_string(),
                    OptionSpec::of(DetectionMode::Single),
                );
                options.insert(METADATA_KEY.to_string(), OptionSpec::of(MetadataType::Basic));
            }
            ProcessorKind::General => {
                options.insert(
                    OPTIMIZATION_KEY.to_string(),
                    OptionSpec::of(OptimizationMode::Quality),
                );
            }
        }
        if kind.takes_format() {
            let default = if supported_formats.contains(&OutputFormat::Obj) {
                OutputFormat::Obj
            } else {
                supported_formats[0]
            };
            options.insert(
                FORMAT_KEY.to_string(),
                OptionSpec {
                    allowed: supported_formats.iter().map(|f| f.as_str().to_string()).collect(),
                    default: default.as_str().to_string(),
                },
            );
        }

        Ok(Self {
            id,
            kind,
            supported_formats,
            options,
            max_resolution,
            default_resolution,
            resolution_presets,
        })
    }

    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.options.get(key)
    }
}
