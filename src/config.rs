use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::error::DetectError;
use crate::patterns::{PatternSet, DEFAULT_PATTERNS};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "vscan-verbose-error-page-detector/1.0";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    pub user_agent: String,
    /// Case-insensitive regular expressions, checked in order.
    pub patterns: Vec<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl DetectorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Builds the effective configuration: defaults, then the config file, then CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };

        if let Some(t) = cli.timeout { config.timeout = t; }
        if let Some(ua) = &cli.user_agent { config.user_agent = ua.clone(); }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DetectError> {
        if self.timeout == 0 {
            return Err(DetectError::Config("timeout must be at least 1 second".into()));
        }
        if self.patterns.is_empty() {
            return Err(DetectError::Config("pattern list is empty".into()));
        }
        Ok(())
    }

    pub fn pattern_set(&self) -> Result<PatternSet, DetectError> {
        PatternSet::new(&self.patterns)
    }
}
