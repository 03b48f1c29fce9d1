//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `execute` module producing an `Outputable` result
//! - Sibling `*_tests.rs` files for CLI parsing and execution

pub mod generate;
pub mod routes;

pub use generate::GenerateCmd;
pub use routes::RoutesCmd;

use clap::Subcommand;
use std::error::Error;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate an introspected schema into a GraphQL SDL document
    Generate(GenerateCmd),

    /// Normalize per-model data-source strategies into a routing map
    Routes(RoutesCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Generate(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
            Command::Routes(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
        }
    }
}
