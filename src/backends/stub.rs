// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Canned processing engines.
//!
//! [`StubEngine`] stands in for the real reconstruction and detection engine:
//! it checks that the asset was actually stored and answers with fixed
//! references, so the whole upload pipeline can run end to end without GPU
//! tooling. [`FailingEngine`] (test builds only) always errors.

use async_trait::async_trait;

use crate::errors::EngineError;
use crate::model::{DetectedItem, DetectionMode, Nutrition, OptionValue};
use crate::traits::{EngineJob, EngineOutput, EngineTask, ProcessingEngine};

/// A stub engine returning fixed model and preview references
#[derive(Debug, Default)]
pub struct StubEngine;

impl StubEngine {
    pub fn new() -> Self {
        Self
    }

    fn detections(mode: DetectionMode, nutritional: bool) -> Vec<DetectedItem> {
        let mut items = vec![DetectedItem {
            name: "Example Food Item".to_string(),
            confidence: 0.95,
            nutrition: nutritional.then_some(Nutrition {
                calories: 100.0,
                protein: 5.0,
                carbs: 20.0,
                fat: 2.0,
            }),
        }];
        if mode == DetectionMode::Multiple {
            items.push(DetectedItem {
                name: "Example Side Item".to_string(),
                confidence: 0.72,
                nutrition: nutritional.then_some(Nutrition {
                    calories: 45.0,
                    protein: 1.0,
                    carbs: 9.0,
                    fat: 0.5,
                }),
            });
        }
        items
    }
}

#[async_trait]
impl ProcessingEngine for StubEngine {
    async fn run(&self, job: EngineJob) -> Result<EngineOutput, EngineError> {
        if !tokio::fs::try_exists(&job.asset_path).await? {
            return Err(EngineError::AssetUnavailable {
                path: job.asset_path,
            });
        }

        let output = match job.task {
            EngineTask::Reconstruct {
                style: Some(_),
                format,
                ..
            } => EngineOutput {
                model_url: format!("processed_model.{}", format.as_str()),
                preview_url: "preview.png".to_string(),
                detected_items: vec![],
            },
            EngineTask::Reconstruct { format, .. } => EngineOutput {
                model_url: format!("general_model.{}", format.as_str()),
                preview_url: "preview.png".to_string(),
                detected_items: vec![],
            },
            EngineTask::DetectFood { mode, nutritional } => EngineOutput {
                model_url: "food_model.obj".to_string(),
                preview_url: "food_preview.png".to_string(),
                detected_items: Self::detections(mode, nutritional),
            },
        };

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// An engine that always fails for testing failure scenarios
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FailingEngine;

#[cfg(test)]
#[async_trait]
impl ProcessingEngine for FailingEngine {
    async fn run(&self, _job: EngineJob) -> Result<EngineOutput, EngineError> {
        Err(EngineError::Rejected("Simulated engine failure".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
