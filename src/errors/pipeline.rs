// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error taxonomy for the upload-and-dispatch pipeline.
//!
//! Every failure a request can end in is a [`PipelineError`]. The only
//! exception is [`CleanupFailure`], which never reaches the caller: the
//! lifecycle manager logs it and returns the primary outcome untouched.

use std::path::PathBuf;
use thiserror::Error;

use crate::errors::EngineError;

/// Fieldless discriminant of [`PipelineError`], for callers that branch on
/// the kind of failure rather than its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoFileProvided,
    EmptyFilename,
    UnsupportedFileType,
    UnknownProcessorType,
    MalformedSettings,
    MalformedResolution,
    ResolutionTooLarge,
    UnsupportedOption,
    EngineFailure,
    StorageError,
}

/// A request failed before producing a result.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No file uploaded")]
    NoFileProvided,

    #[error("No file selected")]
    EmptyFilename,

    #[error("File type not allowed: '{filename}' (allowed: png, jpg, jpeg)")]
    UnsupportedFileType { filename: String },

    #[error("Invalid processor type: '{type_id}'")]
    UnknownProcessorType { type_id: String },

    #[error("Malformed settings: {reason}")]
    MalformedSettings { reason: String },

    #[error("Malformed resolution '{value}': expected <width>x<height> with positive integers")]
    MalformedResolution { value: String },

    #[error("Resolution {width}x{height} exceeds maximum of {max}x{max}")]
    ResolutionTooLarge { width: u32, height: u32, max: u32 },

    #[error("Unsupported {key}: {value}")]
    UnsupportedOption { key: String, value: String },

    /// The processing engine failed; `processor` names the processor that
    /// invoked it.
    #[error("{processor} processing failed: {source}")]
    EngineFailure {
        processor: String,
        #[source]
        source: EngineError,
    },

    /// The uploaded asset could not be written. Raised before any processor
    /// runs.
    #[error("Failed to store upload at '{}': {source}", path.display())]
    StorageError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::NoFileProvided => ErrorKind::NoFileProvided,
            PipelineError::EmptyFilename => ErrorKind::EmptyFilename,
            PipelineError::UnsupportedFileType { .. } => ErrorKind::UnsupportedFileType,
            PipelineError::UnknownProcessorType { .. } => ErrorKind::UnknownProcessorType,
            PipelineError::MalformedSettings { .. } => ErrorKind::MalformedSettings,
            PipelineError::MalformedResolution { .. } => ErrorKind::MalformedResolution,
            PipelineError::ResolutionTooLarge { .. } => ErrorKind::ResolutionTooLarge,
            PipelineError::UnsupportedOption { .. } => ErrorKind::UnsupportedOption,
            PipelineError::EngineFailure { .. } => ErrorKind::EngineFailure,
            PipelineError::StorageError { .. } => ErrorKind::StorageError,
        }
    }

    /// True when the request itself was at fault (bad upload, bad type, bad
    /// settings). Engine and storage failures are server-side.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::EngineFailure | ErrorKind::StorageError
        )
    }

    pub(crate) fn unsupported_option(key: &str, value: impl Into<String>) -> Self {
        PipelineError::UnsupportedOption {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// The temporary copy of an asset could not be deleted.
///
/// Non-fatal: logged by the lifecycle manager and never surfaced to callers.
#[derive(Error, Debug)]
#[error("Error cleaning up file '{}': {source}", path.display())]
pub struct CleanupFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_distinguishable_from_server_errors() {
        let client = [
            PipelineError::NoFileProvided,
            PipelineError::EmptyFilename,
            PipelineError::UnsupportedFileType {
                filename: "cat.exe".to_string(),
            },
            PipelineError::UnknownProcessorType {
                type_id: "sculpture".to_string(),
            },
            PipelineError::MalformedSettings {
                reason: "not an object".to_string(),
            },
            PipelineError::MalformedResolution {
                value: "big".to_string(),
            },
            PipelineError::ResolutionTooLarge {
                width: 4096,
                height: 4096,
                max: 2048,
            },
            PipelineError::unsupported_option("style", "cubist"),
        ];
        for error in &client {
            assert!(error.is_client_error(), "{:?} should be a client error", error.kind());
        }

        let engine = PipelineError::EngineFailure {
            processor: "art".to_string(),
            source: EngineError::Rejected("gpu unavailable".to_string()),
        };
        let storage = PipelineError::StorageError {
            path: PathBuf::from("uploads/x.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(!engine.is_client_error());
        assert!(!storage.is_client_error());
    }

    #[test]
    fn test_engine_failure_message_names_processor_and_cause() {
        let error = PipelineError::EngineFailure {
            processor: "food".to_string(),
            source: EngineError::Rejected("blurry image".to_string()),
        };
        assert_eq!(error.kind(), ErrorKind::EngineFailure);
        assert_eq!(
            error.to_string(),
            "food processing failed: engine rejected the job: blurry image"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_resolution_too_large_message() {
        let error = PipelineError::ResolutionTooLarge {
            width: 4096,
            height: 512,
            max: 2048,
        };
        assert_eq!(
            error.to_string(),
            "Resolution 4096x512 exceeds maximum of 2048x2048"
        );
    }
}
