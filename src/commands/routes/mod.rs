mod execute;
mod output;

pub use execute::RoutesResult;

use clap::Args;
use std::path::PathBuf;

/// Normalize per-model data-source strategies into a routing map
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_idl routes -s strategies.json                 # Human-readable routing table
  schema_idl routes -s strategies.json --format json   # Routing map as JSON")]
pub struct RoutesCmd {
    /// Model-to-strategy map (JSON), e.g. {\"Todo\": {\"dbType\": \"DYNAMODB\", \"provisionStrategy\": \"DEFAULT\"}}
    #[arg(short, long)]
    pub strategies: PathBuf,
}
