// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor and engine backends.
//!
//! ## Local Backend
//! In-process processors, one per domain:
//! - **Art**: style-aware 3D reconstruction (`realistic`, `stylized`)
//! - **Food**: food detection with optional nutrition records
//! - **General**: reconstruction tuned for `speed` or `quality`
//!
//! Each processor validates nothing itself; it receives settings already
//! checked against its descriptor, builds an engine job, and shapes the
//! engine's output into a result.
//!
//! ## Stub Engine
//! A [`ProcessingEngine`](crate::traits::ProcessingEngine) returning fixed
//! references. It is what the service runs with until a real engine is
//! plugged in.
//!
//! # Architecture
//!
//! ```text
//! Configuration → Factory → Processor Instance → Registry
//! ```

pub mod local;
pub mod stub;
