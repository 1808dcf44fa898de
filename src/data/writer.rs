use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Write `dataset` as comma-separated text: header row, then data rows, no
/// index column. An existing file is overwritten.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating '{}'", path.display()))?;

    writer
        .write_record(dataset.headers())
        .with_context(|| format!("writing header to '{}'", path.display()))?;

    for row in dataset.rows() {
        writer
            .write_record(row)
            .with_context(|| format!("writing row to '{}'", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("flushing '{}'", path.display()))?;
    Ok(())
}
