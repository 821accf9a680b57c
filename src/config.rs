//! Engine configuration.
//!
//! The only tunable is the search depth. It is set from the command line or from the
//! UCI `setoption` command and always kept within `0..=MAX_SEARCH_DEPTH`.

use crate::types::{Depth, MAX_SEARCH_DEPTH};
use std::fmt;

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: i32 = 4;

/// Error raised by [`EngineConfig::set_option`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption(String),
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    depth: Depth,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            depth: Depth::new(DEFAULT_DEPTH),
        }
    }

    /// Configuration searching to `depth`, clamped into range
    pub fn with_depth(depth: i32) -> Self {
        Self {
            depth: Depth::new(depth).clamped(),
        }
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.depth = Depth::new(depth).clamped();
    }

    /// Apply a named option as sent by `setoption`. Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        match name.to_lowercase().as_str() {
            "depth" => {
                let raw = value.unwrap_or("");
                let depth = raw.trim().parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                    name: name.to_string(),
                    value: raw.to_string(),
                })?;
                self.set_depth(depth);
                Ok(())
            }
            _ => Err(ConfigError::UnknownOption(name.to_string())),
        }
    }

    /// UCI `option` advertisement lines
    pub fn uci_options() -> Vec<String> {
        vec![format!(
            "option name Depth type spin default {} min 0 max {}",
            DEFAULT_DEPTH, MAX_SEARCH_DEPTH
        )]
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
