// file: src/cli/mod.rs
// version: 1.0.0
// guid: d8c1f6a3-5e07-4b92-a4d9-3b7e0f2c6185

//! Command line interface for the image-to-SVG command host

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
