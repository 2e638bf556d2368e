use crate::persistence::{atomic_write, read_file};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter; RUST_LOG overrides it
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where exported holotapes go; the working directory when unset
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Load config.json. A missing file gives defaults; so does an unreadable one,
/// with a warning.
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    let content = match read_file(path) {
        Ok(Some(content)) => content,
        Ok(None) => return Config::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Config::default()
        }
    }
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, &json)?;
    Ok(())
}
