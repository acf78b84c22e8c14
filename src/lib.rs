// file: src/lib.rs
// version: 1.0.0
// guid: a6d3f082-4b1e-4c97-95a0-7e2c8b1d5f49

//! # image-to-svg
//!
//! Registers a single command, `extension.convertImage`, that converts an
//! image file to SVG by running an external conversion script and reports
//! the outcome as one user-facing message.
//!
//! The script is trusted through its error channel only: any stderr output
//! fails the conversion, and the exit status is never consulted.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod notify;
pub mod registry;

pub use command::{ConversionCommand, ConversionOutcome, FileLocation};
pub use error::{AppError, ConvertError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
