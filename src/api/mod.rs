// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP surface.
//!
//! | Route                | Purpose                                          |
//! |----------------------|--------------------------------------------------|
//! | `GET /api/health`    | liveness probe                                   |
//! | `GET /api/processors`| every processor type with its descriptor         |
//! | `GET /api/settings`  | allowed values per settings key, per type        |
//! | `POST /api/process`  | multipart upload (`file`, `type`, `settings`)    |

pub mod error;
pub mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::engine::RequestLifecycle;

pub use error::{ApiError, ErrorBody};

/// Build the application router around a shared lifecycle.
///
/// Request bodies larger than `max_upload_bytes` are rejected before any
/// handler logic runs.
pub fn router(lifecycle: RequestLifecycle, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/processors", get(handlers::processors))
        .route("/api/settings", get(handlers::settings))
        .route("/api/process", post(handlers::process))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(lifecycle)
}
