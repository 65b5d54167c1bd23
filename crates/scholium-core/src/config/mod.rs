//! Per-subsystem configuration with serde defaults and TOML loading.

mod aggregation_config;
mod contradiction_config;
mod defaults;
mod lifecycle_config;
mod selection_config;

pub use aggregation_config::AggregationConfig;
pub use contradiction_config::ContradictionConfig;
pub use lifecycle_config::LifecycleConfig;
pub use selection_config::SelectionConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ScholiumError, ScholiumResult};

/// Top-level configuration aggregating every subsystem.
/// Missing sections and fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholiumConfig {
    pub aggregation: AggregationConfig,
    pub contradiction: ContradictionConfig,
    pub selection: SelectionConfig,
    pub lifecycle: LifecycleConfig,
}

impl ScholiumConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ScholiumResult<Self> {
        toml::from_str(text).map_err(|e| ScholiumError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> ScholiumResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ScholiumError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&text)
    }
}
