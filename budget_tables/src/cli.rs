//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(about = "Worst-case and average-case BGV noise budget tables")]
pub(crate) struct Args {
    /// Catalog of parameter sets and tables. If not specified, uses the
    /// built-in HElib/SEAL reference catalog.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Output file. If not specified, writes to stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain-text tables.
    Table,
    /// Versioned msgpack report.
    Msgpack,
}
