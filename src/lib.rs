// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod api;            // HTTP surface
pub mod backends;       // processor implementations + engines
pub mod config;         // config, descriptors, settings, registry
pub mod engine;         // request lifecycle
pub mod errors;         // error handling
pub mod model;          // assets, resolutions, results
pub mod observability;
pub mod traits;         // processor + engine abstractions
