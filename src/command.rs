// file: src/command.rs
// version: 1.0.0
// guid: 1e8f3b70-6c25-4a9d-8d04-f5a2c7e913b6

//! The image-to-SVG conversion command
//!
//! [`ConversionCommand::convert`] is the typed core: it never talks to the
//! user. [`ConversionCommand::convert_and_notify`] is the boundary that turns
//! the result into exactly one message.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::executor::{Invocation, ProcessRunner};
use crate::notify::Notifier;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};

/// Absolute path of the image selected for conversion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocation(PathBuf);

impl FileLocation {
    /// Build a location from a path; empty paths yield `None`
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return None;
        }
        Some(Self(path))
    }

    /// Build a location from an optional selection, resolving relative paths
    /// against `base`
    pub fn resolve(selection: Option<&str>, base: &Path) -> Option<Self> {
        let location = Self::new(selection?)?;
        if location.0.is_absolute() {
            Some(location)
        } else {
            Some(Self(base.join(location.0)))
        }
    }

    /// Resolve against the current working directory
    pub fn from_selection(selection: Option<&str>) -> Option<Self> {
        Self::resolve_in(selection, std::env::current_dir())
    }

    /// Resolve against `cwd`; without one, a relative selection stays relative
    fn resolve_in(selection: Option<&str>, cwd: std::io::Result<PathBuf>) -> Option<Self> {
        let base = match cwd {
            Ok(dir) => dir,
            Err(e) => {
                warn!("Cannot read current directory, relative paths stay relative: {}", e);
                PathBuf::new()
            }
        };
        Self::resolve(selection, &base)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub location: FileLocation,
    /// Script standard output, trimmed
    pub output: String,
}

impl ConversionOutcome {
    /// Message shown to the user
    pub fn user_message(&self) -> String {
        format!("Conversion complete: {}", self.output)
    }
}

/// Converts one image per call through the configured external script
#[derive(Clone)]
pub struct ConversionCommand {
    config: ConvertConfig,
    runner: Arc<dyn ProcessRunner>,
}

impl ConversionCommand {
    /// Create a new command
    pub fn new(config: ConvertConfig, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { config, runner }
    }

    /// Run the conversion script for `location`
    ///
    /// Any stderr output fails the conversion, whatever the exit status.
    pub async fn convert(
        &self,
        location: Option<FileLocation>,
    ) -> Result<ConversionOutcome, ConvertError> {
        let location = location.ok_or(ConvertError::MissingInput)?;

        let span = tracing::info_span!("convert", file = %location);
        async move {
            let script = self.config.validate()?;
            let invocation = Invocation::new(
                self.config.shell.clone(),
                vec![
                    script.display().to_string(),
                    location.path().display().to_string(),
                ],
            );
            debug!("Running {}", invocation.command_line());

            let output = self.runner.run(&invocation).await?;
            debug!("Script exit status (ignored): {:?}", output.exit_code);

            if !output.stderr.is_empty() {
                warn!("Script reported errors");
                return Err(ConvertError::ScriptReported(output.stderr));
            }

            let output = output.stdout.trim().to_string();
            info!("Conversion complete");
            Ok(ConversionOutcome { location, output })
        }
        .instrument(span)
        .await
    }

    /// Run the conversion and report the result through `notifier`
    pub async fn convert_and_notify(
        &self,
        location: Option<FileLocation>,
        notifier: &dyn Notifier,
    ) -> Result<ConversionOutcome, ConvertError> {
        let result = self.convert(location).await;
        match &result {
            Ok(outcome) => notifier.show_info(&outcome.user_message()),
            Err(err) => notifier.show_error(&err.user_message()),
        }
        result
    }
}
