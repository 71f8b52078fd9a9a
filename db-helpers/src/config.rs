use serde::Deserialize;
use std::fs;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_SESSION: &str = "db-helpers";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub listen: Option<String>,
    // Session name attached to every error line the responder logs.
    // Defaults to `db-helpers`.
    pub log_session: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Ok(toml::from_str(&cfg_str)?)
    }

    pub fn listen(&self) -> &str {
        self.listen.as_deref().unwrap_or(DEFAULT_LISTEN)
    }

    pub fn log_session(&self) -> &str {
        self.log_session.as_deref().unwrap_or(DEFAULT_LOG_SESSION)
    }
}
