//! Header-ordered appends to flat CSV files
//!
//! Rows are written in the column order of the header already on disk, so
//! files created by older versions (or edited by hand) keep their layout.
//! Existing rows are never rewritten.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use thiserror::Error;
use truckchat_types::Error;

#[derive(Error, Debug)]
pub enum CsvTableError {
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CsvTableError> for Error {
    fn from(e: CsvTableError) -> Self {
        match e {
            CsvTableError::IoError(io) => Error::Io(io),
            other => Error::Csv(other.to_string()),
        }
    }
}

/// Header of an existing file, or `None` when the file is missing or empty
pub fn read_header(path: &Path) -> Result<Option<Vec<String>>, CsvTableError> {
    if !path.exists() || fs::metadata(path)?.len() == 0 {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.iter().all(|h| h.is_empty()) {
        return Ok(None);
    }
    Ok(Some(header))
}

/// Create `path` with `header` as its only line, unless it already has content
pub fn ensure_header(path: &Path, header: &[&str]) -> Result<bool, CsvTableError> {
    if read_header(path)?.is_some() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    writer.write_record(header)?;
    writer.flush()?;
    Ok(true)
}

/// Append one row. Values are looked up by column name; columns without a
/// value get `missing`. A file without a header gets `default_header` first.
pub fn append_row(
    path: &Path,
    default_header: &[&str],
    values: &HashMap<&str, String>,
    missing: &str,
) -> Result<(), CsvTableError> {
    let header = match read_header(path)? {
        Some(header) => header,
        None => {
            ensure_header(path, default_header)?;
            default_header.iter().map(|h| h.to_string()).collect()
        }
    };

    let row: Vec<&str> = header
        .iter()
        .map(|column| {
            values
                .get(column.as_str())
                .map(String::as_str)
                .unwrap_or(missing)
        })
        .collect();

    let mut file = OpenOptions::new().append(true).open(path)?;
    if !ends_with_newline(path)? {
        file.write_all(b"\n")?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(&row)?;
    writer.flush()?;
    Ok(())
}

fn ends_with_newline(path: &Path) -> Result<bool, CsvTableError> {
    let content = fs::read(path)?;
    Ok(content.last().map_or(true, |b| *b == b'\n'))
}

/// Index of each named column in `header`
pub fn column_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_append_creates_header_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("table.csv");
        let mut values = HashMap::new();
        values.insert("a", "1".to_string());

        append_row(&path, &["a", "b"], &values, "NaN").unwrap();
        append_row(&path, &["a", "b"], &values, "NaN").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b\n1,NaN\n1,NaN\n");
    }

    #[test]
    fn test_append_follows_existing_column_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "b,a\nx,y").unwrap();

        let mut values = HashMap::new();
        values.insert("a", "1".to_string());
        values.insert("b", "2".to_string());
        append_row(&path, &["a", "b"], &values, "NaN").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "b,a\nx,y\n2,1\n");
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let mut values = HashMap::new();
        values.insert("name", "Volvo, FH".to_string());
        append_row(&path, &["name"], &values, "NaN").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name\n\"Volvo, FH\"\n");
    }

    #[test]
    fn test_ensure_header_leaves_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        assert!(ensure_header(&path, &["a"]).unwrap());
        fs::write(&path, "a\n1\n").unwrap();
        assert!(!ensure_header(&path, &["a"]).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n1\n");
    }

    #[test]
    fn test_read_header_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_header(&dir.path().join("none.csv")).unwrap().is_none());
    }
}
