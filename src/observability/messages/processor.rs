// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and registry events.

use crate::model::Resolution;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Processor handed a job to the processing engine.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_asset_forge::model::Resolution;
/// use the_asset_forge::observability::messages::processor::ProcessorExecutionStarted;
///
/// let msg = ProcessorExecutionStarted {
///     processor_id: "art",
///     engine: "stub",
///     resolution: Resolution::square(1024),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub engine: &'a str,
    pub resolution: Resolution,
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution started: engine={}, resolution={}",
            self.processor_id, self.engine, self.resolution
        )
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            engine = self.engine,
            resolution = %self.resolution,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_execution",
            span_name = name,
            processor_id = self.processor_id,
            engine = self.engine,
            resolution = %self.resolution,
        )
    }
}

/// Processor execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub duration: Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: duration={:?}",
            self.processor_id, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_execution",
            span_name = name,
            processor_id = self.processor_id,
            duration_ms = self.duration.as_millis() as u64,
        )
    }
}

/// Processor execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_asset_forge::observability::messages::processor::ProcessorExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = ProcessorExecutionFailed {
///     processor_id: "food",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution failed: {}",
            self.processor_id, self.error
        )
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_execution",
            span_name = name,
            processor_id = self.processor_id,
            error = %self.error,
        )
    }
}

/// Processor registry populated at startup.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RegistryBuilt<'a> {
    pub type_ids: &'a [&'a str],
    pub engine: &'a str,
}

impl Display for RegistryBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor registry built: {} processors [{}] on engine '{}'",
            self.type_ids.len(),
            self.type_ids.join(", "),
            self.engine
        )
    }
}

impl StructuredLog for RegistryBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            processor_count = self.type_ids.len(),
            type_ids = self.type_ids.join(","),
            engine = self.engine,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registry",
            span_name = name,
            processor_count = self.type_ids.len(),
            engine = self.engine,
        )
    }
}
