//! Settings for the command line front end.
//!
//! Loaded from `wings-seo.toml` (or an explicit path). Every key is optional:
//!
//! ```toml
//! [http]
//! timeout_secs = 10
//! user_agent = "my-bot/1.0"
//!
//! [output]
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "wings-seo.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; WingsSeoBot/0.1; +https://personalwings.com/bot)";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub http: HttpSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Settings {
    /// Load from `path`, or from `wings-seo.toml` in the working directory if it exists.
    /// Falls back to defaults when no file is found; a file that exists but
    /// does not parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let settings = Self::from_toml(&content)
            .map_err(|e| AppError::config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::config(e.to_string()))
    }
}
