// EN: src/core/config.rs

//! Optional user configuration (`~/.config/spawnline/config.toml`).
//!
//! The file is never created implicitly; a missing file means defaults.

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, ENV_CONFIG_PATH},
    core::env::EnvMap,
    models::ShellRequest,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors from locating or reading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform exposes no user config directory.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The file exists but could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Io {
        /// The config file location.
        path: String,
        /// The underlying read failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        /// The config file location.
        path: String,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for `spawnline open`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OpenConfig {
    /// Replaces the platform's default open command.
    pub command: Option<String>,
}

/// The contents of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Interpreter used by `build`/`run` when `--shell` is not given.
    pub shell: Option<String>,
    /// The `[open]` table.
    #[serde(default)]
    pub open: OpenConfig,
}

impl Config {
    /// The shell request for `build`/`run`, letting an explicit CLI value win.
    pub fn shell_request(&self, cli_shell: Option<String>) -> ShellRequest {
        ShellRequest::from(cli_shell.or_else(|| self.shell.clone()))
    }

    /// The open command override, letting an explicit CLI value win.
    pub fn open_command(&self, cli_command: Option<String>) -> Option<String> {
        cli_command.or_else(|| self.open.command.clone())
    }
}

/// Returns the config file location: `SPAWNLINE_CONFIG` if set, else the user config dir.
pub fn config_path(env: &EnvMap) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env.get_non_empty(ENV_CONFIG_PATH) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
        .ok_or(ConfigError::ConfigDirNotFound)
}

/// Loads the configuration, returning defaults when no file exists.
pub fn load_config(env: &EnvMap) -> Result<Config, ConfigError> {
    let path = match config_path(env) {
        Ok(path) => path,
        Err(ConfigError::ConfigDirNotFound) => {
            log::debug!("No config directory on this system; using defaults.");
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };
    load_config_from(&path)
}

/// Loads the configuration from `path`, returning defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        log::debug!("Config file '{}' not found; using defaults.", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Loaded config from '{}': {:?}", path.display(), config);
    Ok(config)
}
