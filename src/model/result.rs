// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::{
    ArtStyle, DetectionMode, MetadataType, OptimizationMode, OutputFormat, Resolution,
};

/// Output of a successful `Processor::process` call.
///
/// Processor-specific fields are flattened next to the common ones so each
/// processor type keeps its own JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingResult {
    pub model_url: String,
    pub preview_url: String,
    /// Wall time spent in the processing engine, in seconds.
    pub processing_time: f64,
    pub resolution: Resolution,
    #[serde(flatten)]
    pub details: ProcessorDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessorDetails {
    Art {
        style: ArtStyle,
        format: OutputFormat,
    },
    Food {
        detection_mode: DetectionMode,
        metadata: MetadataType,
        detected_items: Vec<DetectedItem>,
    },
    General {
        optimization: OptimizationMode,
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedItem {
    pub name: String,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f64,
    /// Present only when nutritional metadata was requested; serialized as
    /// `null` otherwise.
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_are_flattened_into_result() {
        let result = ProcessingResult {
            model_url: "processed_model.glb".to_string(),
            preview_url: "preview.png".to_string(),
            processing_time: 0.5,
            resolution: Resolution::square(1024),
            details: ProcessorDetails::Art {
                style: ArtStyle::Stylized,
                format: OutputFormat::Glb,
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "model_url": "processed_model.glb",
                "preview_url": "preview.png",
                "processing_time": 0.5,
                "resolution": "1024x1024",
                "style": "stylized",
                "format": "glb",
            })
        );
    }

    #[test]
    fn test_missing_nutrition_serializes_as_null() {
        let item = DetectedItem {
            name: "Apple".to_string(),
            confidence: 0.9,
            nutrition: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value["nutrition"].is_null());
    }
}
