// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::invoke_engine_checked;
use crate::config::{ProcessorDescriptor, ValidatedSettings, DETECTION_KEY, METADATA_KEY};
use crate::errors::{EngineError, PipelineError};
use crate::model::{
    DetectedItem, DetectionMode, MetadataType, ProcessingResult, ProcessorDetails, Resolution,
};
use crate::traits::{EngineJob, EngineTask, ProcessingEngine, Processor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodSettings {
    pub resolution: Resolution,
    pub detection: DetectionMode,
    pub metadata: MetadataType,
}

impl FoodSettings {
    pub fn from_validated(settings: &ValidatedSettings) -> Result<Self, PipelineError> {
        Ok(Self {
            resolution: settings.resolution(),
            detection: settings.typed(DETECTION_KEY)?,
            metadata: settings.typed(METADATA_KEY)?,
        })
    }
}

/// Food processor - detects food items and optionally attaches nutrition data
pub struct FoodProcessor {
    descriptor: ProcessorDescriptor,
    engine: Arc<dyn ProcessingEngine>,
}

impl FoodProcessor {
    pub fn new(descriptor: ProcessorDescriptor, engine: Arc<dyn ProcessingEngine>) -> Self {
        Self { descriptor, engine }
    }

    /// Enforce the detection contract on raw engine output: confidences in
    /// [0, 1], at most one item in single mode, and nutrition present exactly
    /// when it was requested.
    fn shape_items(
        &self,
        mut items: Vec<DetectedItem>,
        settings: &FoodSettings,
    ) -> Result<Vec<DetectedItem>, EngineError> {
        if let Some(bad) = items
            .iter()
            .find(|item| !(0.0..=1.0).contains(&item.confidence))
        {
            return Err(EngineError::InvalidOutput(format!(
                "confidence {} for '{}' is outside [0, 1]",
                bad.confidence, bad.name
            )));
        }

        if settings.detection == DetectionMode::Single && items.len() > 1 {
            items.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
            items.truncate(1);
        }

        match settings.metadata {
            MetadataType::Basic => {
                for item in &mut items {
                    item.nutrition = None;
                }
            }
            MetadataType::Nutritional => {
                if let Some(bare) = items.iter().find(|item| item.nutrition.is_none()) {
                    return Err(EngineError::InvalidOutput(format!(
                        "no nutrition record for '{}'",
                        bare.name
                    )));
                }
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl Processor for FoodProcessor {
    fn descriptor(&self) -> &ProcessorDescriptor {
        &self.descriptor
    }

    async fn process(
        &self,
        asset_path: &Path,
        settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError> {
        let settings = FoodSettings::from_validated(settings)?;

        let job = EngineJob {
            asset_path: asset_path.to_path_buf(),
            resolution: settings.resolution,
            task: EngineTask::DetectFood {
                mode: settings.detection,
                nutritional: settings.metadata == MetadataType::Nutritional,
            },
        };
        let (output, duration) =
            invoke_engine_checked(self.engine.as_ref(), &self.descriptor, job, |mut output| {
                let items = std::mem::take(&mut output.detected_items);
                output.detected_items = self.shape_items(items, &settings)?;
                Ok(output)
            })
            .await?;

        Ok(ProcessingResult {
            model_url: output.model_url,
            preview_url: output.preview_url,
            processing_time: duration.as_secs_f64(),
            resolution: settings.resolution,
            details: ProcessorDetails::Food {
                detection_mode: settings.detection,
                metadata: settings.metadata,
                detected_items: output.detected_items,
            },
        })
    }

    fn name(&self) -> &'static str {
        "food"
    }
}
