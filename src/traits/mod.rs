// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod engine;
pub mod processor;

pub use engine::{EngineJob, EngineOutput, EngineTask, ProcessingEngine};
pub use processor::Processor;
