// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks that processor ids are unique and non-empty, then builds each
//! processor's descriptor to surface inconsistent overrides. Errors are
//! accumulated so an operator sees every problem in one run.

use std::collections::HashSet;

use crate::config::{Config, ProcessorDescriptor};
use crate::errors::ConfigValidationError;

/// Validate a loaded configuration.
///
/// # Returns
///
/// * `Ok(())` - every processor entry can be built
/// * `Err(Vec<ConfigValidationError>)` - all problems found
pub fn validate_config(config: &Config) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for processor in &config.processors {
        if processor.id.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyProcessorId);
        } else if !seen.insert(processor.id.as_str()) {
            errors.push(ConfigValidationError::DuplicateProcessorId {
                processor_id: processor.id.clone(),
            });
        }

        if let Err(descriptor_errors) = ProcessorDescriptor::from_config(processor) {
            errors.extend(descriptor_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
