// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The processing engine: the component that actually reconstructs models
//! and detects food. Processors only prepare jobs for it and shape its
//! output, so it is modelled as a trait object handed to each processor.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::errors::EngineError;
use crate::model::{
    ArtStyle, DetectedItem, DetectionMode, OptimizationMode, OutputFormat, Resolution,
};

/// One unit of work submitted to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineJob {
    /// Location of the stored upload.
    pub asset_path: PathBuf,
    pub resolution: Resolution,
    pub task: EngineTask,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineTask {
    /// Image to 3D model. Art jobs set `style`, general jobs set
    /// `optimization`.
    Reconstruct {
        style: Option<ArtStyle>,
        optimization: Option<OptimizationMode>,
        format: OutputFormat,
    },
    /// Food detection plus model reconstruction.
    DetectFood {
        mode: DetectionMode,
        nutritional: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineOutput {
    pub model_url: String,
    pub preview_url: String,
    pub detected_items: Vec<DetectedItem>,
}

#[async_trait]
pub trait ProcessingEngine: Send + Sync {
    async fn run(&self, job: EngineJob) -> Result<EngineOutput, EngineError>;

    fn name(&self) -> &'static str;
}
