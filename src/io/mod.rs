/// Command-line interface for batch runs
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// Engine error types
pub mod error;
/// Image file loading and export
pub mod image;
/// Progress bars for batch runs
pub mod progress;
