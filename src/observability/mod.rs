// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display`
//! implementation so log lines are not magic strings scattered through the
//! code, and a [`StructuredLog`](messages::StructuredLog) implementation
//! that attaches the same data as typed tracing fields.
//!
//! # Architecture
//!
//! * `messages::lifecycle` - Request intake, storage and cleanup
//! * `messages::processor` - Processor execution and registry events
//! * `messages::validation` - Settings validation rejections
//! * `subscriber` - Global subscriber installation
//!
//! # Usage
//!
//! ```rust
//! use the_asset_forge::observability::messages::processor::ProcessorExecutionFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "art",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
mod subscriber;

pub use subscriber::init_tracing;
