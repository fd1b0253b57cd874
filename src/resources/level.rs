//! Platform layout of the level.
//!
//! The layout is fixed for the lifetime of a run. A built-in layout of twelve
//! platforms ships with the game; an alternative one can be loaded from a JSON
//! file referenced by the `[level] layout` key of the configuration.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "platforms": [
//!     { "x": 0.0, "y": 650.0, "width": 150.0, "height": 25.0 },
//!     { "x": 120.0, "y": 700.0, "width": 0.0, "height": 25.0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PLATFORM_COUNT: usize = 12;
pub const DEFAULT_PLATFORM_HEIGHT: f32 = 25.0;

const DEFAULT_PLATFORM_POSITIONS: [(f32, f32); DEFAULT_PLATFORM_COUNT] = [
    (0.0, 650.0), // landing pad
    (120.0, 700.0),
    (300.0, 300.0),
    (230.0, 610.0),
    (450.0, 500.0),
    (690.0, 350.0),
    (800.0, 470.0),
    (990.0, 500.0),
    (1000.0, 360.0),
    (730.0, 150.0),
    (880.0, 200.0),
    (1060.0, 80.0),
];

/// Position (top-left) and size of one platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Ordered list of platforms; the order is the creation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub platforms: Vec<PlatformSpec>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let platforms = DEFAULT_PLATFORM_POSITIONS
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| PlatformSpec {
                x,
                y,
                width: default_platform_width(i),
                height: DEFAULT_PLATFORM_HEIGHT,
            })
            .collect();
        Self { platforms }
    }
}

/// Width of the i-th built-in platform. Widths alternate between a shrinking
/// and a growing series so later jumps get harder.
fn default_platform_width(i: usize) -> f32 {
    let i = i as i32;
    let width = if i == 0 {
        150
    } else if i % 2 == 0 {
        100 / (i / 2) + i * 20 - 20
    } else if i != DEFAULT_PLATFORM_COUNT as i32 - 1 {
        i * 30 - 30
    } else {
        100
    };
    width as f32
}

impl LevelLayout {
    /// Loads a layout from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path, e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
