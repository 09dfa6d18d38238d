// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the request lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Request intake and its final outcome
//! * Temporary asset storage
//! * Temporary asset cleanup, including non-fatal cleanup failures

use crate::errors::{CleanupFailure, PipelineError};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;
use tracing::Span;

/// Upload accepted for handling. Its span scopes every later event of the
/// request.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RequestReceived<'a> {
    pub request_id: &'a str,
    pub type_id: &'a str,
    pub filename: &'a str,
    pub size: usize,
}

impl Display for RequestReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request {} received: processor='{}', file='{}', size={} bytes",
            self.request_id, self.type_id, self.filename, self.size
        )
    }
}

impl StructuredLog for RequestReceived<'_> {
    fn log(&self) {
        tracing::info!(
            request_id = self.request_id,
            type_id = self.type_id,
            filename = self.filename,
            size = self.size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "request",
            span_name = name,
            request_id = self.request_id,
            type_id = self.type_id,
        )
    }
}

/// Upload written to temporary storage.
///
/// # Log Level
/// `info!` - Important operational event
pub struct AssetStored<'a> {
    pub path: &'a Path,
    pub size: usize,
}

impl Display for AssetStored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Saved file: {} ({} bytes)", self.path.display(), self.size)
    }
}

impl StructuredLog for AssetStored<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            size = self.size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "asset",
            span_name = name,
            path = %self.path.display(),
        )
    }
}

/// Temporary asset removed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct AssetCleanedUp<'a> {
    pub path: &'a Path,
}

impl Display for AssetCleanedUp<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cleaned up file: {}", self.path.display())
    }
}

impl StructuredLog for AssetCleanedUp<'_> {
    fn log(&self) {
        tracing::info!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("asset", span_name = name, path = %self.path.display())
    }
}

/// Temporary asset could not be removed. Never changes the request outcome.
///
/// # Log Level
/// `error!` - Failure requiring attention (leaked file on disk)
pub struct CleanupFailed<'a> {
    pub failure: &'a CleanupFailure,
}

impl Display for CleanupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.failure)
    }
}

impl StructuredLog for CleanupFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = %self.failure.path.display(),
            error = %self.failure.source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "asset",
            span_name = name,
            path = %self.failure.path.display(),
        )
    }
}

/// Request ended with an error.
///
/// # Log Level
/// `warn!` for client errors, `error!` for server-side failures
pub struct RequestFailed<'a> {
    pub type_id: &'a str,
    pub error: &'a PipelineError,
}

impl Display for RequestFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing error ({}): {}", self.type_id, self.error)
    }
}

impl StructuredLog for RequestFailed<'_> {
    fn log(&self) {
        if self.error.is_client_error() {
            tracing::warn!(
                type_id = self.type_id,
                error_kind = ?self.error.kind(),
                "{}", self
            );
        } else {
            tracing::error!(
                type_id = self.type_id,
                error_kind = ?self.error.kind(),
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "request",
            span_name = name,
            type_id = self.type_id,
            error_kind = ?self.error.kind(),
        )
    }
}

/// Request produced a result.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RequestCompleted<'a> {
    pub type_id: &'a str,
    pub duration: Duration,
}

impl Display for RequestCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request for processor '{}' completed in {:?}",
            self.type_id, self.duration
        )
    }
}

impl StructuredLog for RequestCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            type_id = self.type_id,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "request",
            span_name = name,
            type_id = self.type_id,
            duration_ms = self.duration.as_millis() as u64,
        )
    }
}
