// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::invoke_engine;
use crate::config::{ProcessorDescriptor, ValidatedSettings, FORMAT_KEY, OPTIMIZATION_KEY};
use crate::errors::PipelineError;
use crate::model::{OptimizationMode, OutputFormat, ProcessingResult, ProcessorDetails, Resolution};
use crate::traits::{EngineJob, EngineTask, ProcessingEngine, Processor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralSettings {
    pub resolution: Resolution,
    pub optimization: OptimizationMode,
    pub format: OutputFormat,
}

impl GeneralSettings {
    pub fn from_validated(settings: &ValidatedSettings) -> Result<Self, PipelineError> {
        Ok(Self {
            resolution: settings.resolution(),
            optimization: settings.typed(OPTIMIZATION_KEY)?,
            format: settings.typed(FORMAT_KEY)?,
        })
    }
}

/// General purpose reconstruction trading speed against quality
pub struct GeneralProcessor {
    descriptor: ProcessorDescriptor,
    engine: Arc<dyn ProcessingEngine>,
}

impl GeneralProcessor {
    pub fn new(descriptor: ProcessorDescriptor, engine: Arc<dyn ProcessingEngine>) -> Self {
        Self { descriptor, engine }
    }
}

#[async_trait]
impl Processor for GeneralProcessor {
    fn descriptor(&self) -> &ProcessorDescriptor {
        &self.descriptor
    }

    async fn process(
        &self,
        asset_path: &Path,
        settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError> {
        let settings = GeneralSettings::from_validated(settings)?;

        let job = EngineJob {
            asset_path: asset_path.to_path_buf(),
            resolution: settings.resolution,
            task: EngineTask::Reconstruct {
                style: None,
                optimization: Some(settings.optimization),
                format: settings.format,
            },
        };
        let (output, duration) = invoke_engine(self.engine.as_ref(), &self.descriptor, job).await?;

        Ok(ProcessingResult {
            model_url: output.model_url,
            preview_url: output.preview_url,
            processing_time: duration.as_secs_f64(),
            resolution: settings.resolution,
            details: ProcessorDetails::General {
                optimization: settings.optimization,
                format: settings.format,
            },
        })
    }

    fn name(&self) -> &'static str {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::processors::test_support::ScriptedEngine;
    use crate::config::{validate_settings, ProcessorKind, Settings};
    use crate::traits::EngineOutput;

    #[tokio::test]
    async fn test_defaults_to_quality_obj() {
        let engine = Arc::new(ScriptedEngine::returning(EngineOutput {
            model_url: "general_model.obj".to_string(),
            preview_url: "preview.png".to_string(),
            detected_items: vec![],
        }));
        let processor = GeneralProcessor::new(
            ProcessorDescriptor::builtin("general", ProcessorKind::General),
            engine.clone(),
        );
        let settings = validate_settings(&Settings::new(), processor.descriptor()).unwrap();

        let result = processor.process(Path::new("x.png"), &settings).await.unwrap();

        assert_eq!(
            result.details,
            ProcessorDetails::General {
                optimization: OptimizationMode::Quality,
                format: OutputFormat::Obj,
            }
        );
        assert_eq!(result.resolution, Resolution::square(1024));
        assert_eq!(engine.last_job().unwrap().resolution, Resolution::square(1024));
    }

    #[tokio::test]
    async fn test_settings_from_other_descriptor_are_rejected() {
        let engine = Arc::new(ScriptedEngine::failing("unused"));
        let processor = GeneralProcessor::new(
            ProcessorDescriptor::builtin("general", ProcessorKind::General),
            engine.clone(),
        );
        let food = ProcessorDescriptor::builtin("food", ProcessorKind::Food);
        let foreign = validate_settings(&Settings::new(), &food).unwrap();

        let error = processor.process(Path::new("x.png"), &foreign).await.unwrap_err();

        assert!(matches!(error, PipelineError::UnsupportedOption { .. }));
        assert_eq!(engine.job_count(), 0);
    }
}
