// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-request orchestration from raw upload to result.
//!
//! [`RequestLifecycle::handle`] runs the same fixed sequence for every upload:
//!
//! 1. **Intake**: reject an empty filename or a disallowed extension
//! 2. **Lookup**: resolve the processor type id in the registry
//! 3. **Settings**: decode the raw settings and validate them against the
//!    processor's descriptor, filling in defaults
//! 4. **Store**: write the bytes to a uniquely named file in the upload dir
//! 5. **Process**: hand the stored path and validated settings to the processor
//! 6. **Finalize**: remove the stored file, whatever step 5 returned
//!
//! Nothing touches the disk before step 4, so a request rejected in steps
//! 1 to 3 leaves no trace. Once step 4 succeeds the file is owned by a
//! [`TempAsset`], which guarantees removal even if the request future is
//! dropped mid-flight.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::consts::ALLOWED_EXTENSIONS;
use crate::config::{validate_settings, ProcessorRegistry, Settings};
use crate::engine::temp_asset::TempAsset;
use crate::errors::PipelineError;
use crate::model::ProcessingResult;
use crate::observability::messages::lifecycle::{
    CleanupFailed, RequestCompleted, RequestFailed, RequestReceived,
};
use crate::observability::messages::validation::SettingsRejected;
use crate::observability::messages::StructuredLog;

/// Drives uploads through validation, storage, processing and cleanup.
///
/// Cheap to clone; concurrent requests share the registry and upload
/// directory but never a stored file.
#[derive(Debug, Clone)]
pub struct RequestLifecycle {
    registry: Arc<ProcessorRegistry>,
    upload_dir: PathBuf,
}

impl RequestLifecycle {
    /// Creates the upload directory if it does not exist yet.
    pub async fn new(
        registry: Arc<ProcessorRegistry>,
        upload_dir: impl Into<PathBuf>,
    ) -> Result<Self, PipelineError> {
        let upload_dir = upload_dir.into();
        tokio::fs::create_dir_all(&upload_dir)
            .await
            .map_err(|source| PipelineError::StorageError {
                path: upload_dir.clone(),
                source,
            })?;

        Ok(Self {
            registry,
            upload_dir,
        })
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Handle one upload whose settings arrive as the raw JSON form field.
    ///
    /// The settings are only decoded after the extension and processor type
    /// have been accepted.
    pub async fn handle(
        &self,
        type_id: &str,
        filename: &str,
        content: &[u8],
        raw_settings: &str,
    ) -> Result<ProcessingResult, PipelineError> {
        self.run(type_id, filename, content, || Settings::parse(raw_settings))
            .await
    }

    /// Handle one upload with already decoded settings.
    pub async fn handle_settings(
        &self,
        type_id: &str,
        filename: &str,
        content: &[u8],
        settings: &Settings,
    ) -> Result<ProcessingResult, PipelineError> {
        self.run(type_id, filename, content, || Ok(settings.clone()))
            .await
    }

    async fn run<F>(
        &self,
        type_id: &str,
        filename: &str,
        content: &[u8],
        decode_settings: F,
    ) -> Result<ProcessingResult, PipelineError>
    where
        F: FnOnce() -> Result<Settings, PipelineError>,
    {
        let request_id = Uuid::new_v4().simple().to_string();
        let received = RequestReceived {
            request_id: &request_id,
            type_id,
            filename,
            size: content.len(),
        };
        let span = received.span("handle");

        async {
            received.log();
            let started = Instant::now();

            let outcome = self
                .dispatch(type_id, filename, content, decode_settings)
                .await;

            match &outcome {
                Ok(_) => RequestCompleted {
                    type_id,
                    duration: started.elapsed(),
                }
                .log(),
                Err(error) => RequestFailed { type_id, error }.log(),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn dispatch<F>(
        &self,
        type_id: &str,
        filename: &str,
        content: &[u8],
        decode_settings: F,
    ) -> Result<ProcessingResult, PipelineError>
    where
        F: FnOnce() -> Result<Settings, PipelineError>,
    {
        if filename.is_empty() {
            return Err(PipelineError::EmptyFilename);
        }
        if !has_allowed_extension(filename) {
            return Err(PipelineError::UnsupportedFileType {
                filename: filename.to_string(),
            });
        }

        let processor = self.registry.get(type_id)?;
        let descriptor = processor.descriptor();

        let validated = decode_settings()
            .and_then(|settings| validate_settings(&settings, descriptor))
            .map_err(|error| {
                SettingsRejected {
                    processor_id: &descriptor.id,
                    error: &error,
                }
                .log();
                error
            })?;

        let asset = TempAsset::persist(&self.upload_dir, filename, content).await?;

        let result = processor.process(asset.path(), &validated).await;

        if let Err(failure) = asset.finalize().await {
            CleanupFailed { failure: &failure }.log();
        }

        result
    }
}

/// Case-insensitive match of the text after the last `.` against the
/// allowed image extensions.
pub fn has_allowed_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension)),
        None => false,
    }
}
