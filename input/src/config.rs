//! Solver configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! strict_indices = false
//! max_free_variables = 20
//! fail_on_malformed = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use togglesolve::{IndexPolicy, SolveOptions};

/// Batch-level solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Reject operation indices outside the pattern instead of ignoring them.
    pub strict_indices: bool,
    /// Skip enumeration for instances with more free variables than this.
    pub max_free_variables: Option<usize>,
    /// Abort the batch on the first malformed line instead of skipping it.
    pub fail_on_malformed: bool,
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The file is not a valid configuration.
    #[error("invalid configuration in {path}: {source}")]
    Toml {
        /// Path that was read.
        path: String,
        /// Underlying error.
        source: toml::de::Error,
    },
}

impl SolverConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed documents or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Toml`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Toml {
            path: display,
            source,
        })
    }

    /// Core solver options for this configuration.
    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            index_policy: if self.strict_indices {
                IndexPolicy::Reject
            } else {
                IndexPolicy::Ignore
            },
            max_free_variables: self.max_free_variables,
        }
    }
}
