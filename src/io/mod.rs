//! Input/output operations and error handling

/// Command-line parsing and the single-image driver
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and saving
pub mod image;
/// Tile extraction progress display
pub mod progress;
