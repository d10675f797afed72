use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::record::ProductRecord;

/// Write the extracted records as pretty-printed JSON to a date-stamped file
/// in `dir` and return its path.
pub fn write_records(records: &[ProductRecord], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(chrono::Local::now().date_naive()));
    let file =
        File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .with_context(|| format!("cannot write {}", path.display()))?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

fn export_filename(date: NaiveDate) -> String {
    format!("productos_{}.json", date.format("%Y-%m-%d"))
}
