// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalProcessorFactory;
use crate::config::{Config, ProcessorRegistry};
use crate::errors::ConfigError;
use crate::observability::messages::processor::RegistryBuilt;
use crate::observability::messages::StructuredLog;
use crate::traits::ProcessingEngine;

/// Builds the read-only processor registry from configuration.
///
/// Every configured processor shares the one `engine` handle.
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Validate `cfg` and instantiate each configured processor.
    pub fn from_config(
        cfg: &Config,
        engine: Arc<dyn ProcessingEngine>,
    ) -> Result<ProcessorRegistry, ConfigError> {
        crate::config::validate_config(cfg).map_err(ConfigError::Invalid)?;

        let mut registry = ProcessorRegistry::new();
        for processor_config in &cfg.processors {
            let processor =
                LocalProcessorFactory::create_processor(processor_config, Arc::clone(&engine))
                    .map_err(ConfigError::Invalid)?;
            registry.register(processor_config.id.clone(), processor);
        }

        let mut type_ids: Vec<&str> = registry.type_ids().map(String::as_str).collect();
        type_ids.sort_unstable();
        RegistryBuilt {
            type_ids: &type_ids,
            engine: engine.name(),
        }
        .log();

        Ok(registry)
    }
}
