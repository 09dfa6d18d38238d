// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process processors for the art, food and general domains.

pub mod factory;
pub mod processors;

pub use factory::LocalProcessorFactory;
pub use processors::{
    ArtProcessor, ArtSettings, FoodProcessor, FoodSettings, GeneralProcessor, GeneralSettings,
};
