// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for a human-readable line and
//! [`StructuredLog`] to emit the same event with typed tracing fields.
//!
//! # Organization
//!
//! * `lifecycle` - Upload storage, cleanup and request outcomes
//! * `processor` - Processor execution and registry events
//! * `validation` - Settings rejected before dispatch
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_asset_forge::observability::messages::lifecycle::AssetStored;
//! use the_asset_forge::observability::messages::StructuredLog;
//! use std::path::Path;
//!
//! let msg = AssetStored {
//!     path: Path::new("uploads/3f2a_cat.png"),
//!     size: 2048,
//! };
//!
//! msg.log();
//! ```

pub mod lifecycle;
pub mod processor;
pub mod validation;

use tracing::Span;

/// A log message that knows its level and structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level.
    fn log(&self);

    /// A span carrying the message's fields, for scoping follow-up events.
    fn span(&self, name: &str) -> Span;
}
