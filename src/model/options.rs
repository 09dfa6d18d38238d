// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// A closed set of string-valued settings options.
pub trait OptionValue: Sized + Copy + 'static {
    /// Every accepted value, in the order clients see them.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    fn names() -> Vec<String> {
        Self::ALL.iter().map(|v| v.as_str().to_string()).collect()
    }
}

/// Mesh container produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Obj,
    Glb,
}

impl OptionValue for OutputFormat {
    const ALL: &'static [Self] = &[OutputFormat::Obj, OutputFormat::Glb];

    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Obj => "obj",
            OutputFormat::Glb => "glb",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtStyle {
    Realistic,
    Stylized,
}

impl OptionValue for ArtStyle {
    const ALL: &'static [Self] = &[ArtStyle::Realistic, ArtStyle::Stylized];

    fn as_str(self) -> &'static str {
        match self {
            ArtStyle::Realistic => "realistic",
            ArtStyle::Stylized => "stylized",
        }
    }
}

/// How many food items the detector may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    Single,
    Multiple,
}

impl OptionValue for DetectionMode {
    const ALL: &'static [Self] = &[DetectionMode::Single, DetectionMode::Multiple];

    fn as_str(self) -> &'static str {
        match self {
            DetectionMode::Single => "single",
            DetectionMode::Multiple => "multiple",
        }
    }
}

/// Whether detected food items carry a nutrition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataType {
    Basic,
    Nutritional,
}

impl OptionValue for MetadataType {
    const ALL: &'static [Self] = &[MetadataType::Basic, MetadataType::Nutritional];

    fn as_str(self) -> &'static str {
        match self {
            MetadataType::Basic => "basic",
            MetadataType::Nutritional => "nutritional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationMode {
    Speed,
    Quality,
}

impl OptionValue for OptimizationMode {
    const ALL: &'static [Self] = &[OptimizationMode::Speed, OptimizationMode::Quality];

    fn as_str(self) -> &'static str {
        match self {
            OptimizationMode::Speed => "speed",
            OptimizationMode::Quality => "quality",
        }
    }
}
