// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::api::error::ApiError;
use crate::config::consts::DEFAULT_PROCESSOR_TYPE;
use crate::config::{ProcessorDescriptor, RESOLUTION_KEY};
use crate::engine::RequestLifecycle;
use crate::errors::PipelineError;
use crate::model::{Asset, ProcessingResult};

const FILE_FIELD: &str = "file";
const TYPE_FIELD: &str = "type";
const SETTINGS_FIELD: &str = "settings";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProcessorsResponse {
    pub processors: BTreeMap<String, ProcessorDescriptor>,
}

/// Allowed values per settings key, keyed by processor type id.
pub type SettingsResponse = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: &'static str,
    pub result: ProcessingResult,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn processors(State(lifecycle): State<RequestLifecycle>) -> Json<ProcessorsResponse> {
    Json(ProcessorsResponse {
        processors: lifecycle.registry().describe(),
    })
}

pub async fn settings(State(lifecycle): State<RequestLifecycle>) -> Json<SettingsResponse> {
    let settings = lifecycle
        .registry()
        .describe()
        .into_iter()
        .map(|(id, descriptor)| {
            let mut keys = BTreeMap::new();
            keys.insert(
                RESOLUTION_KEY.to_string(),
                descriptor
                    .resolution_presets
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            );
            for (key, spec) in descriptor.options {
                keys.insert(key, spec.allowed);
            }
            (id, keys)
        })
        .collect();

    Json(settings)
}

/// The fields of a `POST /api/process` form.
#[derive(Debug, Default)]
struct ProcessForm {
    /// The first `file` field
    file: Option<Asset>,
    type_id: Option<String>,
    settings: Option<String>,
}

impl ProcessForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                // a part without a filename attribute is a plain field, not a file
                FILE_FIELD if form.file.is_none() => {
                    if let Some(filename) = field.file_name().map(str::to_string) {
                        let content = field.bytes().await?;
                        form.file = Some(Asset::new(filename, content.to_vec()));
                    }
                }
                TYPE_FIELD => form.type_id = Some(field.text().await?),
                SETTINGS_FIELD => form.settings = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

pub async fn process(
    State(lifecycle): State<RequestLifecycle>,
    multipart: Multipart,
) -> Result<Json<ProcessResponse>, ApiError> {
    let form = ProcessForm::read(multipart).await?;

    let asset = form.file.ok_or(PipelineError::NoFileProvided)?;
    let type_id = form
        .type_id
        .unwrap_or_else(|| DEFAULT_PROCESSOR_TYPE.to_string());
    let raw_settings = form.settings.unwrap_or_else(|| "{}".to_string());

    let result = lifecycle
        .handle(&type_id, &asset.filename, &asset.content, &raw_settings)
        .await?;

    Ok(Json(ProcessResponse {
        status: "success",
        result,
    }))
}
