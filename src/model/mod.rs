// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value types shared by the processors, the lifecycle manager and the HTTP
//! surface: uploaded assets, resolutions, option enumerations and results.

mod options;
mod result;

pub use options::{ArtStyle, DetectionMode, MetadataType, OptimizationMode, OptionValue, OutputFormat};
pub use result::{DetectedItem, Nutrition, ProcessingResult, ProcessorDetails};

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Raw uploaded image content plus the client-supplied filename.
///
/// Lives only for one request; the lifecycle manager owns it.
#[derive(Debug, Clone)]
pub struct Asset {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Asset {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Output resolution, written as `<width>x<height>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Parse `"<width>x<height>"`. Both sides must be positive integers.
    ///
    /// A side too large for `u32` saturates to `u32::MAX`, so it is still a
    /// resolution and fails `fits_within` rather than parsing.
    pub fn parse(value: &str) -> Option<Self> {
        let (width, height) = value.split_once('x')?;
        let width = parse_dimension(width)?;
        let height = parse_dimension(height)?;
        Some(Self { width, height })
    }

    pub fn fits_within(&self, max: u32) -> bool {
        self.width <= max && self.height <= max
    }
}

fn parse_dimension(raw: &str) -> Option<u32> {
    // u32::from_str accepts a leading '+', which is not a valid dimension
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // all digits, so the only possible parse failure is overflow
    let value = raw.parse::<u32>().unwrap_or(u32::MAX);
    (value > 0).then_some(value)
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_parse_table_driven() {
        let cases = [
            ("1024x1024", Some(Resolution::square(1024))),
            ("512x2048", Some(Resolution { width: 512, height: 2048 })),
            ("1x1", Some(Resolution::square(1))),
            ("0x512", None),
            ("512x0", None),
            ("512", None),
            ("512x", None),
            ("x512", None),
            ("512x512x512", None),
            ("-512x512", None),
            ("+512x512", None),
            (" 512x512", None),
            ("abcxdef", None),
            ("99999999999x1", Some(Resolution { width: u32::MAX, height: 1 })),
            ("1x99999999999999999999999", Some(Resolution { width: 1, height: u32::MAX })),
            ("0000x1", None),
        ];

        for (input, expected) in cases {
            assert_eq!(Resolution::parse(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_resolution_serializes_as_string() {
        let json = serde_json::to_value(Resolution { width: 640, height: 480 }).unwrap();
        assert_eq!(json, serde_json::json!("640x480"));
    }

    #[test]
    fn test_fits_within() {
        assert!(Resolution::square(2048).fits_within(2048));
        assert!(!Resolution { width: 2049, height: 16 }.fits_within(2048));
        assert!(!Resolution { width: 16, height: 2049 }.fits_within(2048));
    }
}
