// file: src/config/mod.rs
// version: 1.0.0
// guid: 5d7a0c13-9e42-4f86-a1b5-0c3e8d2f6a97

//! Configuration for the conversion command
//!
//! The conversion script location is a setting with a default, overridable by
//! configuration files, environment variables and command line flags.

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the conversion script
pub const DEFAULT_SCRIPT_PATH: &str = "~/Documents/Scripts/image_to_svg.sh";

/// Default shell interpreter
pub const DEFAULT_SHELL: &str = "bash";

/// Environment variable overriding the script path
pub const SCRIPT_ENV: &str = "IMAGE_TO_SVG_SCRIPT";

/// Environment variable overriding the shell interpreter
pub const SHELL_ENV: &str = "IMAGE_TO_SVG_SHELL";

/// Resolved conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Path of the external conversion script; `~` and `$VAR` are expanded
    pub script_path: String,

    /// Interpreter the script is run with
    pub shell: String,

    /// Working directory for the script process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            script_path: DEFAULT_SCRIPT_PATH.to_string(),
            shell: DEFAULT_SHELL.to_string(),
            working_directory: None,
        }
    }
}

/// A partially specified configuration layer, as read from a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub script_path: Option<String>,
    pub shell: Option<String>,
    pub working_directory: Option<PathBuf>,
}

impl ConfigLayer {
    /// Anchor relative paths of this layer to `dir`, the directory of the file
    /// it was read from
    ///
    /// Script paths starting with `~` or `$` are left for expansion.
    pub fn anchor_to(&mut self, dir: &Path) {
        if let Some(ref mut script) = self.script_path {
            let trimmed = script.trim();
            let expandable = trimmed.starts_with('~') || trimmed.starts_with('$');
            if !trimmed.is_empty() && !expandable && Path::new(trimmed).is_relative() {
                let anchored = dir.join(trimmed).display().to_string();
                *script = anchored;
            }
        }
        if let Some(ref mut wd) = self.working_directory {
            if wd.is_relative() {
                let anchored = dir.join(&*wd);
                *wd = anchored;
            }
        }
    }
}

impl ConvertConfig {
    /// Apply a layer on top of this configuration, field by field
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(script_path) = layer.script_path {
            self.script_path = script_path;
        }
        if let Some(shell) = layer.shell {
            self.shell = shell;
        }
        if let Some(wd) = layer.working_directory {
            self.working_directory = Some(wd);
        }
    }

    /// Resolve and check the script path against the current directory
    ///
    /// Called on every conversion so that a script removed after startup is
    /// reported as a configuration problem rather than a launch failure.
    pub fn validate(&self) -> Result<PathBuf, ConvertError> {
        let base = std::env::current_dir().map_err(|e| {
            ConvertError::configuration(format!("cannot resolve current directory: {}", e))
        })?;
        self.validate_from(&base)
    }

    /// Resolve and check the script path, joining a relative path onto `base`
    ///
    /// The returned path is absolute; it is the exact file handed to the
    /// interpreter, whatever the working directory of the script process.
    pub fn validate_from(&self, base: &Path) -> Result<PathBuf, ConvertError> {
        let raw = self.script_path.trim();
        if raw.is_empty() {
            return Err(ConvertError::configuration("script path is empty"));
        }

        if self.shell.trim().is_empty() {
            return Err(ConvertError::configuration("shell interpreter is empty"));
        }

        let expanded = shellexpand::full(raw).map_err(|e| {
            ConvertError::configuration(format!("cannot expand script path {}: {}", raw, e))
        })?;
        let path = base.join(expanded.as_ref());

        if !path.is_file() {
            return Err(ConvertError::configuration(format!(
                "script not found: {}",
                path.display()
            )));
        }

        Ok(path)
    }
}
