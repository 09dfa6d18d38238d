// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end lifecycle tests: built-in registry, stub engine, real files in
//! a temporary upload directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

use crate::backends::stub::{FailingEngine, StubEngine};
use crate::config::{
    Config, ProcessorDescriptor, ProcessorKind, ProcessorRegistry, RuntimeBuilder, Settings,
    ValidatedSettings,
};
use crate::engine::RequestLifecycle;
use crate::errors::{EngineError, ErrorKind, PipelineError};
use crate::model::{
    ArtStyle, DetectionMode, MetadataType, OptimizationMode, OutputFormat, ProcessingResult,
    ProcessorDetails, Resolution,
};
use crate::traits::{EngineJob, EngineOutput, ProcessingEngine, Processor};

const PIXELS: &[u8] = b"\x89PNG\r\n\x1a\nnot really an image";

async fn lifecycle_with(engine: Arc<dyn ProcessingEngine>) -> (TempDir, RequestLifecycle) {
    let dir = TempDir::new().unwrap();
    let registry = RuntimeBuilder::from_config(&Config::default(), engine).unwrap();
    let lifecycle = RequestLifecycle::new(Arc::new(registry), dir.path().join("uploads"))
        .await
        .unwrap();
    (dir, lifecycle)
}

async fn stub_lifecycle() -> (TempDir, RequestLifecycle) {
    lifecycle_with(Arc::new(StubEngine::new())).await
}

fn stored_files(lifecycle: &RequestLifecycle) -> usize {
    std::fs::read_dir(lifecycle.upload_dir()).unwrap().count()
}

/// Records what the stored asset looked like while it was being processed.
struct ProbeProcessor {
    descriptor: ProcessorDescriptor,
    seen: Mutex<Option<(PathBuf, Vec<u8>)>>,
}

impl ProbeProcessor {
    fn new() -> Self {
        Self {
            descriptor: ProcessorDescriptor::builtin("probe", ProcessorKind::General),
            seen: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Processor for ProbeProcessor {
    fn descriptor(&self) -> &ProcessorDescriptor {
        &self.descriptor
    }

    async fn process(
        &self,
        asset_path: &Path,
        settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError> {
        let content = tokio::fs::read(asset_path).await.unwrap();
        *self.seen.lock().unwrap() = Some((asset_path.to_path_buf(), content));
        Ok(ProcessingResult {
            model_url: "probe.obj".to_string(),
            preview_url: "probe.png".to_string(),
            processing_time: 0.0,
            resolution: settings.resolution(),
            details: ProcessorDetails::General {
                optimization: OptimizationMode::Quality,
                format: OutputFormat::Obj,
            },
        })
    }

    fn name(&self) -> &'static str {
        "probe"
    }
}

/// Never finishes; flags once the asset has been handed over.
struct StallingProcessor {
    descriptor: ProcessorDescriptor,
    entered: Arc<AtomicBool>,
}

#[async_trait]
impl Processor for StallingProcessor {
    fn descriptor(&self) -> &ProcessorDescriptor {
        &self.descriptor
    }

    async fn process(
        &self,
        _asset_path: &Path,
        _settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError> {
        self.entered.store(true, Ordering::SeqCst);
        std::future::pending().await
    }

    fn name(&self) -> &'static str {
        "stalling"
    }
}

/// Replaces the stored file with a directory so removal fails, then
/// succeeds or fails with the `fail_with` engine message.
struct SabotagingProcessor {
    inner: ProbeProcessor,
    fail_with: Option<&'static str>,
}

#[async_trait]
impl Processor for SabotagingProcessor {
    fn descriptor(&self) -> &ProcessorDescriptor {
        self.inner.descriptor()
    }

    async fn process(
        &self,
        asset_path: &Path,
        settings: &ValidatedSettings,
    ) -> Result<ProcessingResult, PipelineError> {
        let result = self.inner.process(asset_path, settings).await;
        tokio::fs::remove_file(asset_path).await.unwrap();
        tokio::fs::create_dir(asset_path).await.unwrap();
        match self.fail_with {
            Some(message) => Err(PipelineError::EngineFailure {
                processor: self.descriptor().id.clone(),
                source: EngineError::Rejected(message.to_string()),
            }),
            None => result,
        }
    }

    fn name(&self) -> &'static str {
        "sabotaging"
    }
}

async fn single_processor_lifecycle(processor: Arc<dyn Processor>) -> (TempDir, RequestLifecycle) {
    let dir = TempDir::new().unwrap();
    let mut registry = ProcessorRegistry::new();
    registry.register("probe", processor);
    let lifecycle = RequestLifecycle::new(Arc::new(registry), dir.path())
        .await
        .unwrap();
    (dir, lifecycle)
}

#[tokio::test]
async fn test_art_request_echoes_validated_settings() {
    let (_dir, lifecycle) = stub_lifecycle().await;

    let result = lifecycle
        .handle("art", "cat.png", PIXELS, r#"{"style":"stylized","format":"glb"}"#)
        .await
        .unwrap();

    assert_eq!(
        result.details,
        ProcessorDetails::Art {
            style: ArtStyle::Stylized,
            format: OutputFormat::Glb,
        }
    );
    assert_eq!(result.model_url, "processed_model.glb");
    assert!(!result.preview_url.is_empty());
    assert_eq!(result.resolution, Resolution::square(1024));
    assert_eq!(stored_files(&lifecycle), 0);
}

#[tokio::test]
async fn test_food_request_with_nutrition() {
    let (_dir, lifecycle) = stub_lifecycle().await;

    let result = lifecycle
        .handle(
            "food",
            "meal.jpg",
            PIXELS,
            r#"{"detection":"multiple","metadata":"nutritional"}"#,
        )
        .await
        .unwrap();

    match result.details {
        ProcessorDetails::Food {
            detection_mode,
            metadata,
            detected_items,
        } => {
            assert_eq!(detection_mode, DetectionMode::Multiple);
            assert_eq!(metadata, MetadataType::Nutritional);
            assert_eq!(detected_items.len(), 2);
            assert!(detected_items.iter().all(|item| item.nutrition.is_some()));
        }
        other => panic!("expected food details, got {:?}", other),
    }
    assert_eq!(stored_files(&lifecycle), 0);
}

#[tokio::test]
async fn test_general_request_uses_defaults() {
    let (_dir, lifecycle) = stub_lifecycle().await;

    let result = lifecycle.handle("general", "x.PNG", PIXELS, "{}").await.unwrap();

    assert_eq!(
        result.details,
        ProcessorDetails::General {
            optimization: OptimizationMode::Quality,
            format: OutputFormat::Obj,
        }
    );
    assert_eq!(result.model_url, "general_model.obj");
}

#[tokio::test]
async fn test_decoded_settings_take_the_same_path() {
    let (_dir, lifecycle) = stub_lifecycle().await;
    let settings = Settings::new()
        .with("detection", "single")
        .with("resolution", "512x512");

    let result = lifecycle
        .handle_settings("food", "meal.jpg", PIXELS, &settings)
        .await
        .unwrap();

    assert_eq!(result.resolution, Resolution::square(512));
    match result.details {
        ProcessorDetails::Food { detected_items, .. } => {
            assert_eq!(detected_items.len(), 1);
            assert!(detected_items[0].nutrition.is_none());
        }
        other => panic!("expected food details, got {:?}", other),
    }

    let error = lifecycle
        .handle_settings("food", "meal.jpg", PIXELS, &Settings::new().with("resolution", 512))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MalformedResolution);
    assert_eq!(stored_files(&lifecycle), 0);
}

#[tokio::test]
async fn test_rejections_table_driven() {
    struct TestCase {
        name: &'static str,
        type_id: &'static str,
        filename: &'static str,
        settings: &'static str,
        expected: ErrorKind,
    }

    let cases = vec![
        TestCase {
            name: "disallowed extension",
            type_id: "art",
            filename: "cat.exe",
            settings: "{}",
            expected: ErrorKind::UnsupportedFileType,
        },
        TestCase {
            name: "extension checked before type lookup",
            type_id: "sculpture",
            filename: "cat.gif",
            settings: "{}",
            expected: ErrorKind::UnsupportedFileType,
        },
        TestCase {
            name: "empty filename",
            type_id: "art",
            filename: "",
            settings: "{}",
            expected: ErrorKind::EmptyFilename,
        },
        TestCase {
            name: "unknown processor type",
            type_id: "sculpture",
            filename: "cat.png",
            settings: "{}",
            expected: ErrorKind::UnknownProcessorType,
        },
        TestCase {
            name: "type lookup before settings decode",
            type_id: "sculpture",
            filename: "cat.png",
            settings: "{broken",
            expected: ErrorKind::UnknownProcessorType,
        },
        TestCase {
            name: "undecodable settings",
            type_id: "art",
            filename: "cat.png",
            settings: "{broken",
            expected: ErrorKind::MalformedSettings,
        },
        TestCase {
            name: "resolution over ceiling",
            type_id: "general",
            filename: "x.png",
            settings: r#"{"resolution":"4096x4096"}"#,
            expected: ErrorKind::ResolutionTooLarge,
        },
        TestCase {
            name: "malformed resolution",
            type_id: "general",
            filename: "x.png",
            settings: r#"{"resolution":"big"}"#,
            expected: ErrorKind::MalformedResolution,
        },
        TestCase {
            name: "unsupported style",
            type_id: "art",
            filename: "cat.png",
            settings: r#"{"style":"cubist"}"#,
            expected: ErrorKind::UnsupportedOption,
        },
        TestCase {
            name: "food has no format key but rejects bad metadata",
            type_id: "food",
            filename: "meal.jpeg",
            settings: r#"{"format":"glb","metadata":"allergens"}"#,
            expected: ErrorKind::UnsupportedOption,
        },
    ];

    for case in cases {
        let engine = Arc::new(ScriptedCounter::default());
        let (_dir, lifecycle) = lifecycle_with(engine.clone()).await;

        let error = lifecycle
            .handle(case.type_id, case.filename, PIXELS, case.settings)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), case.expected, "case: {}", case.name);
        assert!(error.is_client_error(), "case: {}", case.name);
        assert_eq!(engine.calls(), 0, "engine invoked in case: {}", case.name);
        assert_eq!(stored_files(&lifecycle), 0, "file left in case: {}", case.name);
    }
}

/// Counts engine invocations; every invocation fails.
#[derive(Default)]
struct ScriptedCounter {
    calls: Mutex<usize>,
}

impl ScriptedCounter {
    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ProcessingEngine for ScriptedCounter {
    async fn run(&self, _job: EngineJob) -> Result<EngineOutput, EngineError> {
        *self.calls.lock().unwrap() += 1;
        Err(EngineError::Rejected("unexpected call".to_string()))
    }

    fn name(&self) -> &'static str {
        "counter"
    }
}

#[tokio::test]
async fn test_engine_failure_is_server_error_and_cleans_up() {
    let (_dir, lifecycle) = lifecycle_with(Arc::new(FailingEngine)).await;

    let error = lifecycle
        .handle("art", "cat.png", PIXELS, "{}")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::EngineFailure);
    assert!(!error.is_client_error());
    assert!(error.to_string().starts_with("art processing failed"));
    assert_eq!(stored_files(&lifecycle), 0);
}

#[tokio::test]
async fn test_processor_sees_stored_copy_under_unique_name() {
    let probe = Arc::new(ProbeProcessor::new());
    let (_dir, lifecycle) = single_processor_lifecycle(probe.clone()).await;

    lifecycle
        .handle("probe", "../My Cat.png", PIXELS, "")
        .await
        .unwrap();

    let (path, content) = probe.seen.lock().unwrap().clone().unwrap();
    assert_eq!(content, PIXELS);
    assert_eq!(path.parent(), Some(lifecycle.upload_dir()));

    let name = path.file_name().unwrap().to_str().unwrap();
    let (prefix, rest) = name.split_once('_').unwrap();
    assert_eq!(prefix.len(), 32);
    assert!(prefix.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(rest, "My_Cat.png");

    assert!(!path.exists());
}

#[tokio::test]
async fn test_cleanup_failure_does_not_change_outcome() {
    let processor = Arc::new(SabotagingProcessor {
        inner: ProbeProcessor::new(),
        fail_with: None,
    });
    let (_dir, lifecycle) = single_processor_lifecycle(processor).await;

    let result = lifecycle.handle("probe", "cat.png", PIXELS, "{}").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cleanup_failure_does_not_mask_processing_error() {
    let processor = Arc::new(SabotagingProcessor {
        inner: ProbeProcessor::new(),
        fail_with: Some("mesh did not converge"),
    });
    let (_dir, lifecycle) = single_processor_lifecycle(processor).await;

    let error = lifecycle
        .handle("probe", "cat.png", PIXELS, "{}")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::EngineFailure);
    assert_eq!(
        error.to_string(),
        "probe processing failed: engine rejected the job: mesh did not converge"
    );
}

#[tokio::test]
async fn test_cancelled_request_removes_asset() {
    let entered = Arc::new(AtomicBool::new(false));
    let processor = Arc::new(StallingProcessor {
        descriptor: ProcessorDescriptor::builtin("probe", ProcessorKind::General),
        entered: Arc::clone(&entered),
    });
    let (_dir, lifecycle) = single_processor_lifecycle(processor).await;

    let outcome = tokio::time::timeout(
        Duration::from_millis(200),
        lifecycle.handle("probe", "cat.png", PIXELS, "{}"),
    )
    .await;

    assert!(outcome.is_err());
    assert!(entered.load(Ordering::SeqCst));
    assert_eq!(stored_files(&lifecycle), 0);
}

#[tokio::test]
async fn test_concurrent_requests_do_not_share_files() {
    let (_dir, lifecycle) = stub_lifecycle().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let lifecycle = lifecycle.clone();
        handles.push(tokio::spawn(async move {
            let settings = if i % 2 == 0 {
                r#"{"style":"stylized"}"#
            } else {
                r#"{"style":"realistic","format":"glb"}"#
            };
            lifecycle.handle("art", "same.png", PIXELS, settings).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(stored_files(&lifecycle), 0);
}
