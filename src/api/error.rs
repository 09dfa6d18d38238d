// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::PipelineError;

/// JSON body of every failed API call.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by the HTTP handlers.
///
/// Pipeline errors map to 400 when the client can fix the request and to
/// 500 otherwise. Multipart decoding errors keep the status axum assigns
/// them (413 when the upload exceeds the body limit).
#[derive(Debug)]
pub enum ApiError {
    Pipeline(PipelineError),
    Multipart(MultipartError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Pipeline(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Multipart(e) => e.status(),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError::Pipeline(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::Pipeline(e) => e.to_string(),
            ApiError::Multipart(e) => format!("Failed to read upload: {}", e.body_text()),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
