// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Settings validation against a processor descriptor.
//!
//! Validation and defaulting happen in one step: a [`ValidatedSettings`]
//! always carries a resolution and a value for every enumerated key the
//! descriptor declares. Keys the descriptor does not know about are ignored
//! so older servers accept settings written for newer clients.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::config::descriptor::RESOLUTION_KEY;
use crate::config::ProcessorDescriptor;
use crate::errors::PipelineError;
use crate::model::{OptionValue, Resolution};

/// Client-supplied settings: option name to string or number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings(Map<String, Value>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the JSON-encoded settings form field. Blank input means no
    /// settings; anything other than a JSON object is malformed.
    pub fn parse(raw: &str) -> Result<Self, PipelineError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(PipelineError::MalformedSettings {
                reason: format!("expected a JSON object, got {}", json_type_name(&other)),
            }),
            Err(e) => Err(PipelineError::MalformedSettings {
                reason: e.to_string(),
            }),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Settings that passed [`validate_settings`] for one descriptor, with
/// defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings {
    resolution: Resolution,
    options: BTreeMap<String, String>,
}

impl ValidatedSettings {
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Read an enumerated option as its typed value.
    ///
    /// Fails with `UnsupportedOption` when the key is missing or holds a value
    /// outside `T`, which only happens if these settings were validated
    /// against a different descriptor.
    pub fn typed<T: OptionValue>(&self, key: &str) -> Result<T, PipelineError> {
        let value = self.option(key).unwrap_or_default();
        T::parse(value).ok_or_else(|| PipelineError::unsupported_option(key, value))
    }
}

/// Validate `settings` against `descriptor` and fill in defaults.
///
/// Pure: no I/O, no logging. Checks `resolution` first, then each enumerated
/// key in name order, and reports the first violation.
pub fn validate_settings(
    settings: &Settings,
    descriptor: &ProcessorDescriptor,
) -> Result<ValidatedSettings, PipelineError> {
    let resolution = match settings.get(RESOLUTION_KEY) {
        None => descriptor.default_resolution,
        Some(value) => validate_resolution(value, descriptor.max_resolution)?,
    };

    let mut options = BTreeMap::new();
    for (key, spec) in &descriptor.options {
        let value = match settings.get(key) {
            None => spec.default.clone(),
            Some(Value::String(s)) if spec.allows(s) => s.clone(),
            Some(Value::String(s)) => return Err(PipelineError::unsupported_option(key, s.as_str())),
            Some(other) => return Err(PipelineError::unsupported_option(key, other.to_string())),
        };
        options.insert(key.clone(), value);
    }

    Ok(ValidatedSettings {
        resolution,
        options,
    })
}

fn validate_resolution(value: &Value, max_resolution: u32) -> Result<Resolution, PipelineError> {
    let raw = match value {
        Value::String(s) => s.as_str(),
        other => {
            return Err(PipelineError::MalformedResolution {
                value: other.to_string(),
            })
        }
    };

    let resolution = Resolution::parse(raw).ok_or_else(|| PipelineError::MalformedResolution {
        value: raw.to_string(),
    })?;

    if !resolution.fits_within(max_resolution) {
        return Err(PipelineError::ResolutionTooLarge {
            width: resolution.width,
            height: resolution.height,
            max: max_resolution,
        });
    }

    Ok(resolution)
}
