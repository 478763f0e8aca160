//! CLI module - Command-line interface for the application.
//!
//! Provides the `serve` command that runs the HTTP gateway.

pub mod args;

pub use args::{Cli, Commands};
