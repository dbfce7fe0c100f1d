use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection settings for the automation controller, loaded from a JSON
/// config file before any API call is made. Every field except `verbose`
/// is required; a missing field is a fatal startup error.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub api_version: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read config file '{}'", path.display()))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("could not parse config file '{}'", path.display()))?;

        Ok(config)
    }

    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}/api/{}",
            self.protocol, self.host, self.port, self.api_version
        )
    }
}
