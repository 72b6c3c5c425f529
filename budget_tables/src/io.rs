//! Catalog and output I/O operations.

use std::{
    fs::{read_to_string, write},
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use budget_tables::Catalog;

/// Load a catalog from a file, or the reference catalog when no path is
/// given. Returns the catalog and a description of its source.
pub(crate) fn read_catalog(catalog_path: Option<&Path>) -> Result<(Catalog, String)> {
    match catalog_path {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read catalog file '{}'", path.display()))?;
            let catalog = Catalog::from_toml_str(&source)
                .with_context(|| format!("failed to parse catalog file '{}'", path.display()))?;
            Ok((catalog, path.display().to_string()))
        }
        None => {
            let catalog =
                Catalog::reference().context("failed to parse the reference catalog")?;
            Ok((catalog, "reference catalog".to_string()))
        }
    }
}

/// Write output bytes to a file or stdout.
pub(crate) fn write_output(output_path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output_path {
        Some(path) => {
            write(path, bytes)
                .with_context(|| format!("failed to write output file '{}'", path.display()))?;
        }
        None => {
            io::stdout()
                .write_all(bytes)
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
