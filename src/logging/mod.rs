// file: src/logging/mod.rs
// version: 1.0.0
// guid: 0b5e2f94-8a71-4c3d-9f60-e4d2b1c7a853

//! Logging system for the image-to-SVG command host

pub mod logger;

pub use logger::init_logger;
