// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::processors::*;
use crate::config::{ProcessorConfig, ProcessorDescriptor, ProcessorKind};
use crate::errors::ConfigValidationError;
use crate::traits::{ProcessingEngine, Processor};

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from configuration
    ///
    /// The `kind` field in the config determines which processor to create:
    /// - `art` -> ArtProcessor
    /// - `food` -> FoodProcessor
    /// - `general` -> GeneralProcessor
    pub fn create_processor(
        config: &ProcessorConfig,
        engine: Arc<dyn ProcessingEngine>,
    ) -> Result<Arc<dyn Processor>, Vec<ConfigValidationError>> {
        let descriptor = ProcessorDescriptor::from_config(config)?;

        let processor: Arc<dyn Processor> = match config.kind {
            ProcessorKind::Art => Arc::new(ArtProcessor::new(descriptor, engine)),
            ProcessorKind::Food => Arc::new(FoodProcessor::new(descriptor, engine)),
            ProcessorKind::General => Arc::new(GeneralProcessor::new(descriptor, engine)),
        };
        Ok(processor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::StubEngine;

    #[test]
    fn test_create_processor_table_driven() {
        struct TestCase {
            name: &'static str,
            config: ProcessorConfig,
            expected_name: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "art",
                config: ProcessorConfig::builtin("art", ProcessorKind::Art),
                expected_name: "art",
            },
            TestCase {
                name: "food under a custom id",
                config: ProcessorConfig::builtin("meals", ProcessorKind::Food),
                expected_name: "food",
            },
            TestCase {
                name: "general",
                config: ProcessorConfig::builtin("general", ProcessorKind::General),
                expected_name: "general",
            },
        ];

        for test_case in test_cases {
            let processor =
                LocalProcessorFactory::create_processor(&test_case.config, Arc::new(StubEngine::new()))
                    .unwrap_or_else(|e| panic!("{}: {:?}", test_case.name, e));
            assert_eq!(processor.name(), test_case.expected_name, "{}", test_case.name);
            assert_eq!(processor.descriptor().id, test_case.config.id);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ProcessorConfig {
            max_resolution: Some(0),
            ..ProcessorConfig::builtin("art", ProcessorKind::Art)
        };
        assert!(LocalProcessorFactory::create_processor(&config, Arc::new(StubEngine::new())).is_err());
    }
}
