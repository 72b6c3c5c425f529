use anyhow::{Context, Result};
use budget_tables::{evaluate, render_report, serialize_report};
use clap::Parser;
use log::info;

mod cli;
mod io;

use cli::{Args, OutputFormat};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (catalog, source) = io::read_catalog(args.catalog.as_deref())?;
    info!(
        "Loaded {} parameter sets and {} tables from {source}",
        catalog.parameter_sets().len(),
        catalog.tables().len()
    );

    let report = evaluate(&catalog).with_context(|| format!("failed to evaluate {source}"))?;

    let bytes = match args.format {
        OutputFormat::Table => render_report(&report).into_bytes(),
        OutputFormat::Msgpack => {
            serialize_report(&report).context("failed to serialize report")?
        }
    };
    io::write_output(args.output.as_deref(), &bytes)?;
    info!(
        "Wrote {} tables as {:?} ({} bytes)",
        report.tables.len(),
        args.format,
        bytes.len()
    );

    Ok(())
}
