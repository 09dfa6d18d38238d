// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Scoped temporary storage for an uploaded asset.
//!
//! A [`TempAsset`] owns one file in the upload directory from the moment it
//! is written until it is removed. [`TempAsset::finalize`] removes it on the
//! normal path; if the guard is dropped without being finalized (the request
//! future was cancelled or a processor panicked) `Drop` removes it instead.
//! Either way the file is removed exactly once.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::{CleanupFailure, PipelineError};
use crate::observability::messages::lifecycle::{AssetCleanedUp, AssetStored, CleanupFailed};
use crate::observability::messages::StructuredLog;

const MAX_FILENAME_LENGTH: usize = 200;
const FALLBACK_FILENAME: &str = "upload";

#[derive(Debug)]
pub struct TempAsset {
    path: PathBuf,
    released: bool,
}

impl TempAsset {
    /// Write `content` under a fresh `<uuid>_<sanitized filename>` name in
    /// `dir`.
    pub async fn persist(dir: &Path, filename: &str, content: &[u8]) -> Result<Self, PipelineError> {
        let path = dir.join(unique_name(filename));
        let asset = Self {
            path,
            released: false,
        };

        if let Err(source) = tokio::fs::write(&asset.path, content).await {
            let path = asset.path.clone();
            // a partial write may have left a file behind
            if let Err(failure) = asset.finalize().await {
                CleanupFailed { failure: &failure }.log();
            }
            return Err(PipelineError::StorageError { path, source });
        }

        AssetStored {
            path: &asset.path,
            size: content.len(),
        }
        .log();
        Ok(asset)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the stored file. A file that is already gone counts as removed.
    pub async fn finalize(mut self) -> Result<(), CleanupFailure> {
        self.released = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                AssetCleanedUp { path: &self.path }.log();
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CleanupFailure {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Drop for TempAsset {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        match std::fs::remove_file(&self.path) {
            Ok(()) => AssetCleanedUp { path: &self.path }.log(),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                let failure = CleanupFailure {
                    path: self.path.clone(),
                    source,
                };
                CleanupFailed { failure: &failure }.log();
            }
        }
    }
}

fn unique_name(filename: &str) -> String {
    format!("{}_{}", Uuid::new_v4().simple(), sanitize_filename(filename))
}

/// Reduce a client filename to a single portable path component.
///
/// Keeps only the last component (either separator), maps everything except
/// ASCII alphanumerics, `.`, `-` and `_` to `_`, strips leading dots, and
/// falls back to `upload` when nothing usable remains.
pub fn sanitize_filename(filename: &str) -> String {
    let last_component = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let mapped: String = last_component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = mapped.trim_start_matches('.');
    let sanitized: String = trimmed
        .chars()
        .rev()
        .take(MAX_FILENAME_LENGTH)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if sanitized.trim_matches(|c| c == '_' || c == '.').is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        sanitized
    }
}
