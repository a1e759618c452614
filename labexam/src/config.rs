//! Run configuration: input limits and verification mode.
//!
//! Loaded from an optional TOML file, then overridden by command-line flags.
//!
//! ```toml
//! verify = true
//!
//! [limits]
//! max_elements = 100
//! max_capacity = 1000
//! max_string_len = 100
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Upper bounds on input sizes. Defaults match the classic fixed-size lab
/// arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Sequence length, vertex count and edge count.
    pub max_elements: usize,
    /// Knapsack capacity, change amount and job deadline; these size DP and slot tables.
    pub max_capacity: usize,
    /// LCS word length.
    pub max_string_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_elements: 100,
            max_capacity: 1000,
            max_string_len: 100,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    pub limits: Limits,
    /// Check kernel postconditions after the timed section.
    pub verify: bool,
}

impl LabConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
