// file: src/cli/commands.rs
// version: 1.0.0
// guid: f4b09e27-6d3a-4c81-9a5e-0e1c8d7b2f93

//! Command implementations for the CLI

use crate::{
    command::{ConversionCommand, FileLocation},
    config::ConvertConfig,
    error::ConvertError,
    executor::ShellRunner,
    notify::{ConsoleNotifier, ConsoleStyle, Notifier},
    registry::{self, CommandRegistry, CONVERT_IMAGE_COMMAND},
    Result,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Build the conversion command for a resolved configuration
pub fn conversion_command(config: &ConvertConfig) -> ConversionCommand {
    let runner = match config.working_directory {
        Some(ref wd) => ShellRunner::with_working_directory(wd),
        None => ShellRunner::new(),
    };
    ConversionCommand::new(config.clone(), Arc::new(runner))
}

/// Build a registry with every command activated
pub fn build_registry(config: &ConvertConfig) -> Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    registry::activate(&mut registry, conversion_command(config))?;
    Ok(registry)
}

/// Convert each file in its own task; returns whether every conversion succeeded
///
/// Messages are emitted in completion order. With no files the command runs
/// once without a selection.
pub async fn convert_command(
    config: &ConvertConfig,
    files: &[String],
    style: ConsoleStyle,
) -> Result<bool> {
    let registry = build_registry(config)?;
    let handler = registry.get(CONVERT_IMAGE_COMMAND)?;
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new(style));

    if files.is_empty() {
        let status = handler.handle(None, notifier.as_ref()).await;
        return Ok(status.is_success());
    }

    info!("Converting {} file(s)", files.len());

    let mut tasks = JoinSet::new();
    for file in files {
        let location = FileLocation::from_selection(Some(file.as_str()));
        let handler = handler.clone();
        let notifier = notifier.clone();
        tasks.spawn(async move { handler.handle(location, notifier.as_ref()).await });
    }

    let mut all_succeeded = true;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(status) => all_succeeded &= status.is_success(),
            Err(e) => {
                error!("Conversion task aborted: {}", e);
                notifier.show_error(&ConvertError::Unknown.user_message());
                all_succeeded = false;
            }
        }
    }

    Ok(all_succeeded)
}

/// Run a registered command by name
pub async fn invoke_command(
    config: &ConvertConfig,
    name: &str,
    file: Option<&str>,
    style: ConsoleStyle,
) -> Result<bool> {
    let registry = build_registry(config)?;
    let notifier = ConsoleNotifier::new(style);
    let status = registry
        .execute(name, FileLocation::from_selection(file), &notifier)
        .await?;
    Ok(status.is_success())
}

/// List registered command names
pub fn list_commands_command(config: &ConvertConfig, json: bool) -> Result<()> {
    let registry = build_registry(config)?;
    let names = registry.names();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Check the script path and interpreter; returns whether both are usable
pub fn check_command(config: &ConvertConfig, style: ConsoleStyle) -> Result<bool> {
    let notifier = ConsoleNotifier::new(style);
    let mut ok = true;

    match config.validate() {
        Ok(script) => notifier.show_info(&format!("Script: {}", script.display())),
        Err(e) => {
            notifier.show_error(&e.to_string());
            ok = false;
        }
    }

    match which::which(&config.shell) {
        Ok(shell) => notifier.show_info(&format!("Shell: {}", shell.display())),
        Err(e) => {
            warn!("Interpreter lookup failed: {}", e);
            notifier.show_error(&format!("Shell not found: {}", config.shell));
            ok = false;
        }
    }

    Ok(ok)
}

/// Print the resolved configuration as TOML
pub fn show_config_command(config: &ConvertConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn script(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", body).unwrap();
        file
    }

    fn config_for(script: &NamedTempFile) -> ConvertConfig {
        ConvertConfig {
            script_path: script.path().display().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_registry_contains_conversion() {
        let registry = build_registry(&ConvertConfig::default()).unwrap();
        assert_eq!(registry.names(), vec![CONVERT_IMAGE_COMMAND.to_string()]);
    }

    #[tokio::test]
    async fn test_convert_command_reports_success() {
        let script = script(r#"echo "  ${1%.*}.svg  ""#);
        let config = config_for(&script);

        let ok = convert_command(&config, &["/tmp/a.png".to_string()], ConsoleStyle::Plain)
            .await
            .unwrap();

        assert!(ok);
    }

    #[tokio::test]
    async fn test_convert_command_any_failure_fails() {
        let script = script(r#"case "$1" in *bad*) echo "cannot read $1" >&2 ;; *) echo ok ;; esac"#);
        let config = config_for(&script);
        let files = vec!["/tmp/good.png".to_string(), "/tmp/bad.png".to_string()];

        let ok = convert_command(&config, &files, ConsoleStyle::Plain)
            .await
            .unwrap();

        assert!(!ok);
    }

    #[tokio::test]
    async fn test_convert_command_without_files_fails() {
        let ok = convert_command(&ConvertConfig::default(), &[], ConsoleStyle::Plain)
            .await
            .unwrap();
        assert!(!ok);
    }

    #[tokio::test]
    async fn test_invoke_unknown_command_is_error() {
        let result = invoke_command(&ConvertConfig::default(), "nope", None, ConsoleStyle::Plain).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_check_command_missing_script() {
        let config = ConvertConfig {
            script_path: "/nonexistent/image_to_svg.sh".to_string(),
            ..Default::default()
        };
        assert!(!check_command(&config, ConsoleStyle::Plain).unwrap());
    }

    #[test]
    fn test_check_command_missing_shell() {
        let script = script("true");
        let config = ConvertConfig {
            shell: "definitely-not-a-shell-xyz".to_string(),
            ..config_for(&script)
        };
        assert!(!check_command(&config, ConsoleStyle::Plain).unwrap());
    }
}
