// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod loader;
mod registry;
mod runtime;
mod settings;
mod validation;

pub mod consts;

pub use descriptor::{
    OptionSpec, ProcessorDescriptor, ProcessorKind, DETECTION_KEY, FORMAT_KEY, METADATA_KEY,
    OPTIMIZATION_KEY, RESOLUTION_KEY, STYLE_KEY,
};
pub use loader::{
    load_and_validate_config, load_config, Config, LogFormat, LoggingConfig, ProcessorConfig,
    ServerConfig,
};
pub use registry::ProcessorRegistry;
pub use runtime::RuntimeBuilder;
pub use settings::{validate_settings, Settings, ValidatedSettings};
pub use validation::validate_config;
