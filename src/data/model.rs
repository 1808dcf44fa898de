use anyhow::{Result, bail};
use csv::StringRecord;

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// A table of named columns whose cells are kept as the exact text read.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Dataset {
    /// Build a dataset, rejecting rows whose width differs from the header.
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Result<Self> {
        if headers.is_empty() {
            bail!("no columns to parse from file");
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                bail!(
                    "row {}: expected {} fields, found {}",
                    i + 1,
                    headers.len(),
                    row.len()
                );
            }
        }
        Ok(Dataset { headers, rows })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Number of rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Positional row selection, in the order given by `indices`.
    ///
    /// Panics if an index is out of bounds; callers pass indices derived
    /// from `0..self.len()`.
    pub fn take(&self, indices: &[usize]) -> Dataset {
        Dataset {
            headers: self.headers.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}
