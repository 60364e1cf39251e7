//! Input/output: CLI, configuration, diagnostics, errors and exports

/// Command-line interface and subcommand runner
pub mod cli;
/// Named constants for sizes and export defaults
pub mod configuration;
/// Progress-string sinks for margin builds
pub mod diagnostics;
/// Error types for precondition failures and export operations
pub mod error;
/// PNG export of canvases and matrices
pub mod image;
/// Progress bars and the console logger
pub mod progress;
/// Frame capture and GIF export
pub mod visualization;
