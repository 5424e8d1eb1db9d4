//! CLI argument parsing

use crate::types::CommentMode;
use clap::Parser;
use std::path::PathBuf;

/// Generate Go type declarations from a JSON document
#[derive(Parser, Debug)]
#[command(name = "json2go")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file ("-" or absent reads stdin)
    pub input: Option<PathBuf>,

    /// Output file (stdout when absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extra struct tag (repeatable; "json" is always present and first)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Comment handling
    #[arg(long, default_value = "off")]
    pub comments: CommentStyle,

    /// Render object-typed fields behind a pointer
    #[arg(short, long)]
    pub pointers: bool,

    /// Emit one root declaration with inline anonymous structs
    #[arg(short, long)]
    pub nested: bool,

    /// Emit a GetField accessor per record
    #[arg(short, long)]
    pub accessors: bool,

    /// Type name for the document root
    #[arg(long, default_value = "AutoGenerated")]
    pub root: String,

    /// Print the inferred schema as JSON instead of Go source
    #[arg(long)]
    pub schema: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Comment handling for the emitted declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CommentStyle {
    /// Drop comments
    Off,
    /// Comment on its own line above the field
    Line,
    /// Comment at the end of the field line
    Trailing,
}

impl From<CommentStyle> for CommentMode {
    fn from(style: CommentStyle) -> Self {
        match style {
            CommentStyle::Off => CommentMode::Off,
            CommentStyle::Line => CommentMode::Line,
            CommentStyle::Trailing => CommentMode::Trailing,
        }
    }
}
