use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level trainer configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TrainerConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Quiz settings.
    #[serde(default)]
    pub quiz: QuizToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizToml {
    /// First year quiz dates are drawn from.
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Last year quiz dates are drawn from.
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for QuizToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

fn default_start_year() -> i32 {
    1700
}
fn default_end_year() -> i32 {
    2030
}

/// Loads configuration from `path`. A missing file yields the defaults, so
/// the trainer runs without any setup.
pub fn load(path: &Path) -> Result<TrainerConfig> {
    if !path.exists() {
        return Ok(TrainerConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
