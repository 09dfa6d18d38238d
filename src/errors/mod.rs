// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod engine;
mod pipeline;

pub use config::{ConfigError, ConfigValidationError};
pub use engine::EngineError;
pub use pipeline::{CleanupFailure, ErrorKind, PipelineError};
