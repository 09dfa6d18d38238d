// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for settings rejected before dispatch.

use crate::errors::PipelineError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Settings failed validation against a processor's descriptor.
///
/// # Log Level
/// `warn!` - Client error, no server-side action needed
///
/// # Example
/// ```
/// use the_asset_forge::errors::PipelineError;
/// use the_asset_forge::observability::messages::validation::SettingsRejected;
///
/// let error = PipelineError::MalformedResolution { value: "big".to_string() };
/// let msg = SettingsRejected {
///     processor_id: "art",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct SettingsRejected<'a> {
    pub processor_id: &'a str,
    pub error: &'a PipelineError,
}

impl Display for SettingsRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Settings rejected for processor '{}': {}",
            self.processor_id, self.error
        )
    }
}

impl StructuredLog for SettingsRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_id = self.processor_id,
            error_kind = ?self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "settings_validation",
            span_name = name,
            processor_id = self.processor_id,
            error_kind = ?self.error.kind(),
        )
    }
}
