// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::Path;

use crate::config::{ProcessorDescriptor, ValidatedSettings};
use crate::errors::PipelineError;
use crate::model::ProcessingResult;

/// A processor turns a stored image asset into a [`ProcessingResult`].
///
/// Implementations hold no per-request mutable state: the descriptor and its
/// option tables are fixed at construction, so one instance is shared by
/// every concurrent request through the registry.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Static capabilities and constraints for this processor type.
    fn descriptor(&self) -> &ProcessorDescriptor;

    /// Process the asset stored at `asset_path`.
    ///
    /// `settings` must already have been validated against
    /// [`Processor::descriptor`]. Engine failures are returned as
    /// [`PipelineError::EngineFailure`] carrying this processor's id.
    async fn process(
        &self,
        asset_path: &Path,
        settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError>;

    fn name(&self) -> &'static str;
}
