use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Pick the field delimiter from the file extension.
///
/// * `.tsv` – tab separated
/// * anything else – comma separated
pub fn delimiter_for(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "tsv" => b'\t',
        _ => b',',
    }
}

/// Load a delimited file with a header row into a [`Dataset`].
///
/// Blank lines are skipped. Every data row must have as many fields as the
/// header; cells are kept verbatim.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening dataset '{}'", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("reading header of '{}'", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        rows.push(record);
    }

    Dataset::new(headers, rows).with_context(|| format!("parsing '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_header_and_rows_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stud.csv");
        fs::write(&path, "gender,math_score\nfemale,72\n\"male, x\",069\n").unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(
            ds.headers().iter().collect::<Vec<_>>(),
            vec!["gender", "math_score"]
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(&ds.rows()[1][0], "male, x");
        assert_eq!(&ds.rows()[1][1], "069");
    }

    #[test]
    fn tsv_extension_is_tab_delimited() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stud.tsv");
        fs::write(&path, "a\tb\n1\t2\n").unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column_count(), 2);
        assert_eq!(&ds.rows()[0][1], "2");
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "a,b\n").unwrap();

        let ds = load_file(&path).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_count(), 2);
    }

    #[test]
    fn empty_file_has_no_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing.csv");
        fs::write(&path, "").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("no columns to parse from file"));
    }

    #[test]
    fn ragged_row_names_the_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b\n1,2\n3,4,5\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 2"));
    }

    #[test]
    fn missing_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
