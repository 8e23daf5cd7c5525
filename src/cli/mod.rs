//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, command handlers
//! and the main application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod options_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_recommend, RecommendOptions, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
