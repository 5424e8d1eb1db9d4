//! CLI command execution

use crate::cli::commands::Cli;
use crate::config::Config;
use crate::engine::Generator;
use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Executes one CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the generator over the requested input
    pub fn run(&self) -> Result<()> {
        let input = self.read_input()?;
        let generator = Generator::new(self.config());

        let output = if self.cli.schema {
            let tree = generator.schema(&input)?;
            let mut text = serde_json::to_string_pretty(&tree.to_json())?;
            text.push('\n');
            text
        } else {
            generator.generate(&input)?
        };

        self.write_output(&output)
    }

    fn config(&self) -> Config {
        Config {
            tags: self.cli.tags.clone(),
            comments: self.cli.comments.into(),
            pointers: self.cli.pointers,
            nested: self.cli.nested,
            accessors: self.cli.accessors,
            root_name: self.cli.root.clone(),
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.cli.input {
            Some(path) if path != Path::new("-") => {
                if !path.exists() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                tracing::debug!(path = %path.display(), "reading input file");
                Ok(std::fs::read_to_string(path)?)
            }
            _ => {
                tracing::debug!("reading stdin");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }

    fn write_output(&self, text: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => {
                std::fs::write(path, text)?;
                tracing::info!(path = %path.display(), "output written");
            }
            None => {
                print!("{text}");
            }
        }
        Ok(())
    }
}
