// file: src/registry.rs
// version: 1.0.0
// guid: 47e0b9c8-2d13-4a6f-b7e5-8f9c1d3a0e62

//! Named command registration and dispatch

use crate::command::{ConversionCommand, FileLocation};
use crate::error::RegistryError;
use crate::notify::Notifier;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Name the conversion command is registered under
pub const CONVERT_IMAGE_COMMAND: &str = "extension.convertImage";

/// How a handler invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    Failed,
}

impl CommandStatus {
    pub fn is_success(self) -> bool {
        self == CommandStatus::Succeeded
    }
}

/// A command bound to a name; all outcomes are reported through the notifier
#[async_trait::async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, location: Option<FileLocation>, notifier: &dyn Notifier)
        -> CommandStatus;
}

#[async_trait::async_trait]
impl CommandHandler for ConversionCommand {
    async fn handle(
        &self,
        location: Option<FileLocation>,
        notifier: &dyn Notifier,
    ) -> CommandStatus {
        match self.convert_and_notify(location, notifier).await {
            Ok(_) => CommandStatus::Succeeded,
            Err(_) => CommandStatus::Failed,
        }
    }
}

/// Table of registered commands
#[derive(Default, Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `name`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.commands.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        debug!("Registered command {}", name);
        self.commands.insert(name, handler);
        Ok(())
    }

    /// Look up a handler by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn CommandHandler>, RegistryError> {
        self.commands
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// Run the handler bound to `name`
    pub async fn execute(
        &self,
        name: &str,
        location: Option<FileLocation>,
        notifier: &dyn Notifier,
    ) -> Result<CommandStatus, RegistryError> {
        let handler = self.get(name)?;
        Ok(handler.handle(location, notifier).await)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Register the conversion command
pub fn activate(
    registry: &mut CommandRegistry,
    command: ConversionCommand,
) -> Result<(), RegistryError> {
    registry.register(CONVERT_IMAGE_COMMAND, Arc::new(command))?;
    info!("Activated {}", CONVERT_IMAGE_COMMAND);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertConfig;
    use crate::executor::ShellRunner;
    use crate::notify::{MessageLevel, RecordingNotifier};

    struct Echo;

    #[async_trait::async_trait]
    impl CommandHandler for Echo {
        async fn handle(
            &self,
            location: Option<FileLocation>,
            notifier: &dyn Notifier,
        ) -> CommandStatus {
            match location {
                Some(loc) => {
                    notifier.show_info(&loc.to_string());
                    CommandStatus::Succeeded
                }
                None => CommandStatus::Failed,
            }
        }
    }

    #[tokio::test]
    async fn test_register_and_execute() {
        // Arrange
        let mut registry = CommandRegistry::new();
        registry.register("test.echo", Arc::new(Echo)).unwrap();
        let notifier = RecordingNotifier::new();

        // Act
        let status = registry
            .execute("test.echo", FileLocation::new("/x.png"), &notifier)
            .await
            .unwrap();

        // Assert
        assert!(status.is_success());
        assert_eq!(notifier.messages()[0].text, "/x.png");
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = CommandRegistry::new();
        registry.register("test.echo", Arc::new(Echo)).unwrap();

        let err = registry.register("test.echo", Arc::new(Echo)).unwrap_err();

        assert_eq!(err, RegistryError::Duplicate("test.echo".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let registry = CommandRegistry::new();
        let notifier = RecordingNotifier::new();

        let err = registry.execute("nope", None, &notifier).await.unwrap_err();

        assert_eq!(err, RegistryError::Unknown("nope".to_string()));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_activate_registers_conversion() {
        let mut registry = CommandRegistry::new();
        let command = ConversionCommand::new(ConvertConfig::default(), Arc::new(ShellRunner::new()));

        activate(&mut registry, command).unwrap();

        assert_eq!(registry.names(), vec![CONVERT_IMAGE_COMMAND.to_string()]);

        let notifier = RecordingNotifier::new();
        let status = registry
            .execute(CONVERT_IMAGE_COMMAND, None, &notifier)
            .await
            .unwrap();
        assert_eq!(status, CommandStatus::Failed);
        assert_eq!(notifier.messages()[0].level, MessageLevel::Error);
        assert_eq!(notifier.messages()[0].text, "No image file selected.");
    }
}
