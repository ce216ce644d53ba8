use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;

/// Root configuration structure for fibseq
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FibConfig {
    /// Term counts used by the built-in demonstration
    #[serde(default)]
    pub demo: DemoSettings,

    /// Output defaults for the `sequence` command
    #[serde(default)]
    pub output: OutputConfig,
}

/// Term counts printed by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Terms printed by each of the first three sections
    #[serde(default = "default_terms")]
    pub terms: i64,

    /// Terms printed by the final sequence-builder section
    #[serde(default = "default_extended_terms")]
    pub extended_terms: i64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            terms: default_terms(),
            extended_terms: default_extended_terms(),
        }
    }
}

pub fn default_terms() -> i64 {
    10
}

pub fn default_extended_terms() -> i64 {
    20
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}
