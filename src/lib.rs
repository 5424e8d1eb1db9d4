// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # json2go
//!
//! Generate Go type declarations from example JSON documents.
//!
//! ## Features
//!
//! - **Schema Inference**: Unify every occurrence of a field across arrays
//!   into one shape and one scalar type
//! - **Go Naming**: Raw JSON keys become exported PascalCase identifiers with
//!   Go initialism casing (`user_id` -> `UserID`), digit spelling and
//!   Unicode transliteration
//! - **Comment Carrying**: `//` and `/* */` comments in the input survive
//!   onto the matching struct fields
//! - **Flat or Nested Output**: One named declaration per record, or one root
//!   declaration with inline anonymous structs
//!
//! ## Quick Start
//!
//! ```rust
//! use json2go::{generate, Result};
//!
//! fn main() -> Result<()> {
//!     let go = generate(r#"{"user_id": 1, "tags": ["a", "b"]}"#)?;
//!     assert!(go.contains("UserID int"));
//!     assert!(go.contains("Tags []string"));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! input text -> source::parse_str -> RawValue (ordered members + comments)
//!            -> schema::build     -> SchemaTree (classified, merged)
//!            -> render::render    -> Go declarations
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for json2go
pub mod error;

/// Common types shared across the pipeline
pub mod types;

/// Generation configuration
pub mod config;

/// Comment-aware JSON parsing
pub mod source;

/// Identifier normalization
pub mod naming;

/// Schema inference: classification, collection and merging
pub mod schema;

/// Go source emission
pub mod render;

/// Main generation engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{CommentMode, Group, ScalarType};

pub use config::Config;
pub use engine::{generate, Generator};
pub use schema::SchemaTree;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
