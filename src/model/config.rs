use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Maximum number of titles returned by a suggestion lookup
    #[serde(default = "default_suggest_limit")]
    pub limit: usize,
    /// Inputs shorter than this (in chars) produce no suggestions
    #[serde(default = "default_min_input_len")]
    pub min_input_len: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            limit: default_suggest_limit(),
            min_input_len: default_min_input_len(),
        }
    }
}

fn default_suggest_limit() -> usize {
    5
}

fn default_min_input_len() -> usize {
    2
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON even without `--json`
    #[serde(default)]
    pub json: bool,
}
