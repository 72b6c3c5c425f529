use std::fs::read_to_string;

use anyhow::{Result, anyhow};
use budget_tables::Catalog;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long)]
    catalog_path: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = read_to_string(&args.catalog_path)
        .map_err(|e| anyhow!("failed to read catalog file '{}': {e}", args.catalog_path))?;
    Catalog::from_toml_str(&source).map_err(|e| {
        anyhow!(
            "failed to parse catalog file '{}': {}",
            args.catalog_path,
            error_chain(&e)
        )
    })?;

    Ok(())
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
