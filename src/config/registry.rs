// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ProcessorDescriptor;
use crate::errors::PipelineError;
use crate::traits::Processor;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Maps processor type ids to their implementations.
///
/// The registry is populated once at startup and then shared read-only (in
/// an `Arc`) by every request, so lookups need no locking. Processors are
/// held as `Arc<dyn Processor>` and handed out by reference count, never
/// cloned.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use the_asset_forge::config::ProcessorRegistry;
///
/// let mut registry = ProcessorRegistry::new();
/// registry.register("art", Arc::new(art_processor));
///
/// let processor = registry.get("art")?;
/// let capabilities = registry.describe();
/// ```
#[derive(Clone, Default)]
pub struct ProcessorRegistry(HashMap<String, Arc<dyn Processor>>);

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a processor under `type_id`, replacing any previous entry.
    pub fn register(&mut self, type_id: impl Into<String>, processor: Arc<dyn Processor>) {
        self.0.insert(type_id.into(), processor);
    }

    /// Look up a processor by type id
    pub fn get(&self, type_id: &str) -> Result<Arc<dyn Processor>, PipelineError> {
        self.0
            .get(type_id)
            .cloned()
            .ok_or_else(|| PipelineError::UnknownProcessorType {
                type_id: type_id.to_string(),
            })
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.0.contains_key(type_id)
    }

    /// Capability discovery: every registered type id with its descriptor,
    /// sorted by id.
    pub fn describe(&self) -> BTreeMap<String, ProcessorDescriptor> {
        self.0
            .iter()
            .map(|(id, processor)| (id.clone(), processor.descriptor().clone()))
            .collect()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processor_count", &self.0.len())
            .field("type_ids", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}
