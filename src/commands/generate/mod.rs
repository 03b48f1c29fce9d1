mod execute;
mod execute_tests;
mod output;

pub use execute::GenerateResult;

use clap::Args;
use std::path::PathBuf;

/// Translate an introspected schema into a GraphQL SDL document
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_idl generate -s schema.json                      # SDL only
  schema_idl generate -s schema.json -c datasource.json   # SDL with a DataSource block
  schema_idl generate -s schema.json --format json        # SDL plus skipped models as JSON")]
pub struct GenerateCmd {
    /// Introspected schema (JSON)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Data-source configuration (JSON); omit for a schema-only document
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
