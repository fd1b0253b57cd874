//! Error types for startup configuration.
//!
//! The simulation itself has no failure paths; everything that can go wrong
//! is caught while loading and validating [`GameConfig`] before the loop
//! starts.
//!
//! [`GameConfig`]: crate::resources::gameconfig::GameConfig

use std::fmt;

/// Reasons a configuration is rejected at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Tick rate is zero, negative, not finite or above the supported maximum.
    InvalidTickRate(f32),
    /// The level has no platforms.
    EmptyLayout,
    /// Window width or height is zero.
    InvalidWindow { width: u32, height: u32 },
    /// A platform has a non-positive or non-finite size or position.
    InvalidPlatform { index: usize },
    /// The player or goal box has a non-positive or non-finite size.
    InvalidBodySize { what: &'static str },
    /// The player spawn or the goal is placed at a non-finite coordinate.
    InvalidPosition { what: &'static str },
    /// A velocity limit or physics constant is negative or not finite.
    InvalidPhysics { name: &'static str, value: f32 },
    /// The config or layout file could not be read or written.
    Io(String),
    /// The config or layout file could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTickRate(rate) => {
                write!(
                    f,
                    "tick rate must be in (0, {}], got {}",
                    crate::resources::gameconfig::MAX_TICK_RATE,
                    rate
                )
            }
            ConfigError::EmptyLayout => write!(f, "level layout has no platforms"),
            ConfigError::InvalidWindow { width, height } => {
                write!(f, "invalid window size {}x{}", width, height)
            }
            ConfigError::InvalidPlatform { index } => {
                write!(f, "platform {} has an invalid position or size", index)
            }
            ConfigError::InvalidBodySize { what } => {
                write!(f, "{} size must be positive and finite", what)
            }
            ConfigError::InvalidPosition { what } => {
                write!(f, "{} position must be finite", what)
            }
            ConfigError::InvalidPhysics { name, value } => {
                write!(f, "physics value '{}' is invalid: {}", name, value)
            }
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
