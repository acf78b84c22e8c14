// file: src/cli/args.rs
// version: 1.0.0
// guid: 2a7d4e19-b360-4f5c-8e81-c9f05a3d7b24

//! Command line argument definitions

use crate::config::ConvertConfig;
use crate::notify::ConsoleStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "image-to-svg")]
#[command(about = "Convert image files to SVG through an external conversion script")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Configuration file to load after the default locations")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Conversion script to run")]
    pub script: Option<String>,

    #[arg(long, global = true, help = "Interpreter the script is run with")]
    pub shell: Option<String>,

    #[arg(long, global = true, help = "Print messages as JSON lines")]
    pub json: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    /// Apply command line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut ConvertConfig) {
        if let Some(ref script) = self.script {
            config.script_path = script.clone();
        }
        if let Some(ref shell) = self.shell {
            config.shell = shell.clone();
        }
    }

    /// Message style selected by the output flags
    pub fn console_style(&self) -> ConsoleStyle {
        if self.json {
            ConsoleStyle::Json
        } else if self.no_color {
            ConsoleStyle::Plain
        } else {
            ConsoleStyle::Colored
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert image files to SVG; files are converted concurrently
    Convert {
        #[arg(help = "Image files to convert")]
        files: Vec<String>,
    },

    /// Run a registered command by name
    Invoke {
        #[arg(help = "Command name, e.g. extension.convertImage")]
        name: String,

        #[arg(help = "File passed to the command")]
        file: Option<String>,
    },

    /// List registered commands
    #[command(name = "commands")]
    ListCommands,

    /// Check that the conversion script and interpreter are available
    Check,

    /// Print the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_with_files() {
        let cli = Cli::parse_from(["image-to-svg", "convert", "a.png", "b.png"]);
        match cli.command {
            Commands::Convert { files } => assert_eq!(files, vec!["a.png", "b.png"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_overrides() {
        // Arrange
        let cli = Cli::parse_from([
            "image-to-svg",
            "convert",
            "--script",
            "/opt/convert.sh",
            "--shell",
            "sh",
            "--json",
        ]);
        let mut config = ConvertConfig::default();

        // Act
        cli.apply_overrides(&mut config);

        // Assert
        assert_eq!(config.script_path, "/opt/convert.sh");
        assert_eq!(config.shell, "sh");
        assert_eq!(cli.console_style(), ConsoleStyle::Json);
    }

    #[test]
    fn test_invoke_without_file() {
        let cli = Cli::parse_from(["image-to-svg", "invoke", "extension.convertImage"]);
        match cli.command {
            Commands::Invoke { name, file } => {
                assert_eq!(name, "extension.convertImage");
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_color_style() {
        let cli = Cli::parse_from(["image-to-svg", "check", "--no-color"]);
        assert_eq!(cli.console_style(), ConsoleStyle::Plain);
    }
}
