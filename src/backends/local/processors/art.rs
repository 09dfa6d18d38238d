// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::invoke_engine;
use crate::config::{ProcessorDescriptor, ValidatedSettings, FORMAT_KEY, STYLE_KEY};
use crate::errors::PipelineError;
use crate::model::{ArtStyle, OutputFormat, ProcessingResult, ProcessorDetails, Resolution};
use crate::traits::{EngineJob, EngineTask, ProcessingEngine, Processor};

/// Typed settings for the art processor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtSettings {
    pub resolution: Resolution,
    pub style: ArtStyle,
    pub format: OutputFormat,
}

impl ArtSettings {
    pub fn from_validated(settings: &ValidatedSettings) -> Result<Self, PipelineError> {
        Ok(Self {
            resolution: settings.resolution(),
            style: settings.typed(STYLE_KEY)?,
            format: settings.typed(FORMAT_KEY)?,
        })
    }
}

/// Art asset processor - reconstructs a 3D model in a realistic or stylized look
pub struct ArtProcessor {
    descriptor: ProcessorDescriptor,
    engine: Arc<dyn ProcessingEngine>,
}

impl ArtProcessor {
    pub fn new(descriptor: ProcessorDescriptor, engine: Arc<dyn ProcessingEngine>) -> Self {
        Self { descriptor, engine }
    }
}

#[async_trait]
impl Processor for ArtProcessor {
    fn descriptor(&self) -> &ProcessorDescriptor {
        &self.descriptor
    }

    async fn process(
        &self,
        asset_path: &Path,
        settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError> {
        let settings = ArtSettings::from_validated(settings)?;

        let job = EngineJob {
            asset_path: asset_path.to_path_buf(),
            resolution: settings.resolution,
            task: EngineTask::Reconstruct {
                style: Some(settings.style),
                optimization: None,
                format: settings.format,
            },
        };
        let (output, duration) = invoke_engine(self.engine.as_ref(), &self.descriptor, job).await?;

        Ok(ProcessingResult {
            model_url: output.model_url,
            preview_url: output.preview_url,
            processing_time: duration.as_secs_f64(),
            resolution: settings.resolution,
            details: ProcessorDetails::Art {
                style: settings.style,
                format: settings.format,
            },
        })
    }

    fn name(&self) -> &'static str {
        "art"
    }
}
