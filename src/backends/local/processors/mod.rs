// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod art;
pub mod food;
pub mod general;

pub use art::*;
pub use food::*;
pub use general::*;

use std::time::{Duration, Instant};

use crate::config::ProcessorDescriptor;
use crate::errors::{EngineError, PipelineError};
use crate::observability::messages::processor::{
    ProcessorExecutionCompleted, ProcessorExecutionFailed, ProcessorExecutionStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{EngineJob, EngineOutput, ProcessingEngine};

/// Run one engine job on behalf of `descriptor`'s processor, timing it and
/// wrapping any failure with the processor id.
pub(crate) async fn invoke_engine(
    engine: &dyn ProcessingEngine,
    descriptor: &ProcessorDescriptor,
    job: EngineJob,
) -> Result<(EngineOutput, Duration), PipelineError> {
    invoke_engine_checked(engine, descriptor, job, Ok).await
}

/// Like [`invoke_engine`], but `check` must accept the engine output before
/// the execution counts as completed. A rejected output is logged once, as
/// a failure.
pub(crate) async fn invoke_engine_checked<T, F>(
    engine: &dyn ProcessingEngine,
    descriptor: &ProcessorDescriptor,
    job: EngineJob,
    check: F,
) -> Result<(T, Duration), PipelineError>
where
    F: FnOnce(EngineOutput) -> Result<T, EngineError>,
{
    let start_msg = ProcessorExecutionStarted {
        processor_id: &descriptor.id,
        engine: engine.name(),
        resolution: job.resolution,
    };
    start_msg.log();

    let start_time = Instant::now();
    let outcome = engine.run(job).await;
    let duration = start_time.elapsed();

    match outcome.and_then(check) {
        Ok(checked) => {
            ProcessorExecutionCompleted {
                processor_id: &descriptor.id,
                duration,
            }
            .log();
            Ok((checked, duration))
        }
        Err(source) => Err(engine_failure(descriptor, source)),
    }
}

/// Wrap an engine error with the processor id and log it.
pub(crate) fn engine_failure(descriptor: &ProcessorDescriptor, source: EngineError) -> PipelineError {
    ProcessorExecutionFailed {
        processor_id: &descriptor.id,
        error: &source,
    }
    .log();

    PipelineError::EngineFailure {
        processor: descriptor.id.clone(),
        source,
    }
}
