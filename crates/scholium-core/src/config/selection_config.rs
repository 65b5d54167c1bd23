use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate paper selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Question tokens shorter than this are ignored.
    pub min_token_len: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
        }
    }
}
