// file: src/config/loader.rs
// version: 1.0.0
// guid: c2a96e07-41b8-4d5f-8f3a-7b1e0d94c658

//! Configuration file loading and environment overrides

use super::{ConfigLayer, ConvertConfig, SCRIPT_ENV, SHELL_ENV};
use crate::error::AppError;
use crate::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = ".image-to-svg.toml";

/// Layered configuration loader
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
    user_config: Option<PathBuf>,
    project_config: PathBuf,
}

impl ConfigLoader {
    /// Create a loader reading the process environment and default locations
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
            user_config: dirs::config_dir().map(|dir| dir.join("image-to-svg").join("config.toml")),
            project_config: PathBuf::from(PROJECT_CONFIG_FILE),
        }
    }

    /// Create a loader with no environment and no implicit files
    pub fn isolated() -> Self {
        Self {
            env_vars: HashMap::new(),
            user_config: None,
            project_config: PathBuf::new(),
        }
    }

    /// Set environment variable for overrides
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Override the user configuration file location
    pub fn with_user_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_config = Some(path.into());
        self
    }

    /// Override the project configuration file location
    pub fn with_project_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_config = path.into();
        self
    }

    /// Load configuration from defaults, files and environment
    ///
    /// `explicit` must exist when given; implicit files are skipped when absent.
    pub fn load(&self, explicit: Option<&Path>) -> Result<ConvertConfig> {
        let mut config = ConvertConfig::default();

        if let Some(ref user_config) = self.user_config {
            if user_config.is_file() {
                info!("Loading user configuration from: {}", user_config.display());
                config.merge(Self::load_layer(user_config)?);
            }
        }

        if !self.project_config.as_os_str().is_empty() && self.project_config.is_file() {
            info!(
                "Loading project configuration from: {}",
                self.project_config.display()
            );
            config.merge(Self::load_layer(&self.project_config)?);
        }

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(AppError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            info!("Loading configuration from: {}", path.display());
            config.merge(Self::load_layer(path)?);
        }

        self.apply_env_overrides(&mut config);

        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Load a single configuration layer from a TOML file
    ///
    /// Relative paths in the file are anchored to the file's directory.
    pub fn load_layer(path: &Path) -> Result<ConfigLayer> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut layer: ConfigLayer = toml::from_str(&content).map_err(|e| {
            AppError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        if let Some(dir) = path.parent() {
            layer.anchor_to(dir);
        }

        Ok(layer)
    }

    fn apply_env_overrides(&self, config: &mut ConvertConfig) {
        if let Some(script) = self.env_vars.get(SCRIPT_ENV).filter(|v| !v.is_empty()) {
            debug!("{} overrides script path", SCRIPT_ENV);
            config.script_path = script.clone();
        }

        if let Some(shell) = self.env_vars.get(SHELL_ENV).filter(|v| !v.is_empty()) {
            debug!("{} overrides shell", SHELL_ENV);
            config.shell = shell.clone();
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
