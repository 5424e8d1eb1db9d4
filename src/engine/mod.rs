//! Main generation engine
//!
//! Runs the whole pipeline over one fully-buffered document:
//! parse -> classify/collect -> merge -> normalize -> render. The run is
//! synchronous and in-memory; every run owns its own identifier table, so
//! concurrent generators never share naming state.

use crate::config::Config;
use crate::error::Result;
use crate::naming::NameTable;
use crate::render::{assign_identifiers, render};
use crate::schema::{build, SchemaTree};
use crate::source::parse_str;

/// One-document Go type generator
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a generator; the `json` tag is enforced on the tag list
    pub fn new(mut config: Config) -> Self {
        config.ensure_default_tag();
        Self { config }
    }

    /// The effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate Go declarations for one document
    pub fn generate(&self, input: &str) -> Result<String> {
        let doc = parse_str(input)?;
        let mut tree = build(&doc, &self.config.root_name)?;
        let text = render(&mut tree, &self.config);
        tracing::debug!(bytes = text.len(), nested = self.config.nested, "rendered");
        Ok(text)
    }

    /// Infer the schema only, with identifiers assigned but no text emitted
    pub fn schema(&self, input: &str) -> Result<SchemaTree> {
        let doc = parse_str(input)?;
        let mut tree = build(&doc, &self.config.root_name)?;
        let mut names = NameTable::new();
        assign_identifiers(&mut tree, &mut names);
        Ok(tree)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Generate with default options (convenience function)
pub fn generate(input: &str) -> Result<String> {
    Generator::default().generate(input)
}

#[cfg(test)]
mod tests;
