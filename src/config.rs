impl Default for Config {
    fn default() -> Self {
        Config {
            profile: None,
            instance_id: 28,
            service_id: 42,
            log_level: "info".to_string(),
            log_to_file: false,
            log_file: None,
        }
    }
}
use crate::error::ConfigError;
use serde::Deserialize;
use std::{fs, io, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Registry name of the profile to load; `None` loads the only registered one.
    pub profile: Option<String>,
    pub instance_id: i32,
    pub service_id: i32,
    pub log_level: String,
    pub log_to_file: bool,
    pub log_file: Option<String>,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}

/// Like [`load_config`], but a missing file yields `Config::default()`.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(Config::default())
        }
        other => other,
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}
