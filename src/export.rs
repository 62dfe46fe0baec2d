//! CSV snapshot of the ranked products.

use crate::meli::Product;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes the ranked products to `path` as UTF-8 CSV.
///
/// Creates or truncates the file, writes the fixed header and one row per
/// product in ranked order, then flushes before the handle is dropped. An
/// existing file is overwritten without warning. Filesystem errors
/// propagate to the caller.
pub fn write_csv(products: &[Product], path: &Path) -> Result<()> {
    debug!("Writing {} products to {}", products.len(), path.display());

    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Nombre,Precio (MXN),Link")?;

    for product in products {
        writeln!(
            writer,
            "{},{},{}",
            csv_escape(&product.name),
            product.price,
            csv_escape(&product.link)
        )?;
    }

    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
