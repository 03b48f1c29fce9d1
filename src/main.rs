use clap::Parser;

use schema_idl::cli::Args;
use schema_idl::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();
    let output = args.command.run(args.format)?;
    println!("{}", output);
    Ok(())
}
