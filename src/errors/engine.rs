// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by a [`ProcessingEngine`](crate::traits::ProcessingEngine).

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by the processing engine for a single job.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The stored asset could not be found or opened by the engine.
    #[error("asset '{}' is not available to the engine", path.display())]
    AssetUnavailable { path: PathBuf },

    /// The engine refused the job (bad input image, unsupported combination, ...).
    #[error("engine rejected the job: {0}")]
    Rejected(String),

    /// The engine returned output that breaks the processor's contract.
    #[error("engine returned invalid output: {0}")]
    InvalidOutput(String),

    /// I/O failure while the engine was reading or writing its artifacts.
    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),
}
