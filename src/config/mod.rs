use anyhow::Context;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::webhook::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub root: String,
    pub export_dir: String,
    /// Unset keeps the HTTP client's own default.
    pub timeout_secs: Option<u64>,
    pub save_request: bool,
    pub save_response: bool,
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            root: ".".into(),
            export_dir: ".".into(),
            timeout_secs: None,
            save_request: false,
            save_response: false,
            progress: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }
}
