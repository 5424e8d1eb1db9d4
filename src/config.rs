//! Generation configuration
//!
//! Options that shape the emitted text only; none of them alter the inferred
//! schema.

use crate::types::CommentMode;
use serde::{Deserialize, Serialize};

/// Struct tag that is always present, and always first
pub const DEFAULT_TAG: &str = "json";

/// Type name of the synthetic document root
pub const DEFAULT_ROOT_NAME: &str = "AutoGenerated";

/// Generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Struct tags to emit for every field, in order
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// Comment handling for the emitted declarations
    #[serde(default)]
    pub comments: CommentMode,

    /// Render object-typed fields behind a pointer
    #[serde(default)]
    pub pointers: bool,

    /// Emit one root declaration with inline anonymous structs instead of
    /// one named declaration per record
    #[serde(default)]
    pub nested: bool,

    /// Emit a `GetField` accessor per record
    #[serde(default)]
    pub accessors: bool,

    /// Type name for the document root
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

fn default_tags() -> Vec<String> {
    vec![DEFAULT_TAG.to_string()]
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            comments: CommentMode::default(),
            pointers: false,
            nested: false,
            accessors: false,
            root_name: default_root_name(),
        }
    }
}

impl Config {
    /// Ensure the `json` tag is present and first
    pub fn ensure_default_tag(&mut self) {
        if self.tags.iter().any(|t| t == DEFAULT_TAG) {
            return;
        }
        self.tags.insert(0, DEFAULT_TAG.to_string());
    }
}
