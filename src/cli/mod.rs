//! CLI module
//!
//! Command-line interface for generating Go declarations from a JSON
//! document on disk or on stdin.

mod commands;
mod runner;

pub use commands::{Cli, CommentStyle};
pub use runner::Runner;
