// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request lifecycle: intake checks, temporary storage, dispatch and cleanup.

pub mod lifecycle;
pub mod temp_asset;
#[cfg(test)]
mod integration_tests;

pub use lifecycle::{has_allowed_extension, RequestLifecycle};
pub use temp_asset::{sanitize_filename, TempAsset};
