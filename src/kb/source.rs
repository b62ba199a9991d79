//! Tabular content sources.
//!
//! A source resolves `(source_id, sheet)` to ordered rows of cells, header
//! row included.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::error::SourceError;

/// One row of cells.
pub type Row = Vec<String>;

/// Backend-agnostic tabular source (spreadsheet, CSV export, ...).
pub trait TabularSource: Send + Sync {
    /// Fetch every row of `sheet`, or `SourceError::NotFound` if it does
    /// not exist.
    fn fetch_rows(&self, source_id: &str, sheet: &str) -> Result<Vec<Row>, SourceError>;
}

// ── CSV directory ───────────────────────────────────────────────────

/// CSV exports on disk, laid out as `{root}/{source_id}/{sheet}.csv`.
///
/// Files are read headerless so the header reaches the formatter like any
/// other row; ragged rows are allowed and cells are trimmed.
pub struct CsvDirectorySource {
    root: PathBuf,
}

impl CsvDirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn sheet_path(&self, source_id: &str, sheet: &str) -> PathBuf {
        self.root.join(source_id).join(format!("{sheet}.csv"))
    }
}

impl TabularSource for CsvDirectorySource {
    fn fetch_rows(&self, source_id: &str, sheet: &str) -> Result<Vec<Row>, SourceError> {
        let path = self.sheet_path(source_id, sheet);
        if !path.is_file() {
            return Err(SourceError::NotFound {
                sheet: sheet.to_string(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %path.display(), rows = rows.len(), "Read CSV sheet");
        Ok(rows)
    }
}

// ── In-memory ───────────────────────────────────────────────────────

/// In-memory source (for tests and embedding), counting fetches.
#[derive(Default)]
pub struct MemorySource {
    sheets: RwLock<HashMap<(String, String), Vec<Row>>>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a sheet.
    pub fn insert(&self, source_id: &str, sheet: &str, rows: Vec<Row>) {
        if let Ok(mut sheets) = self.sheets.write() {
            sheets.insert((source_id.to_string(), sheet.to_string()), rows);
        }
    }

    /// Drop a sheet, so later fetches report `NotFound`.
    pub fn remove(&self, source_id: &str, sheet: &str) {
        if let Ok(mut sheets) = self.sheets.write() {
            sheets.remove(&(source_id.to_string(), sheet.to_string()));
        }
    }

    /// Number of `fetch_rows` calls so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl TabularSource for MemorySource {
    fn fetch_rows(&self, source_id: &str, sheet: &str) -> Result<Vec<Row>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.sheets
            .read()
            .ok()
            .and_then(|sheets| {
                sheets
                    .get(&(source_id.to_string(), sheet.to_string()))
                    .cloned()
            })
            .ok_or_else(|| SourceError::NotFound {
                sheet: sheet.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn memory_source_round_trip_and_not_found() {
        let source = MemorySource::new();
        source.insert("kb", "Lite", vec![row(&["Categoria", "Domanda", "Risposta"])]);

        assert_eq!(source.fetch_rows("kb", "Lite").unwrap().len(), 1);
        assert!(matches!(
            source.fetch_rows("kb", "Heavy"),
            Err(SourceError::NotFound { .. })
        ));
        assert!(matches!(
            source.fetch_rows("other", "Lite"),
            Err(SourceError::NotFound { .. })
        ));
        assert_eq!(source.fetch_count(), 3);

        source.remove("kb", "Lite");
        assert!(source.fetch_rows("kb", "Lite").is_err());
    }

    #[test]
    fn csv_source_reads_ragged_rows() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("kb")).unwrap();
        std::fs::write(
            tmp.path().join("kb").join("Lite.csv"),
            "Categoria,Domanda,Risposta\n Orari , Quando?, Alle 9 \nsolo una cella\n",
        )
        .unwrap();

        let source = CsvDirectorySource::new(tmp.path());
        let rows = source.fetch_rows("kb", "Lite").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], row(&["Orari", "Quando?", "Alle 9"]));
        assert_eq!(rows[2], row(&["solo una cella"]));
    }

    #[test]
    fn csv_source_missing_sheet_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let source = CsvDirectorySource::new(tmp.path());
        assert!(matches!(
            source.fetch_rows("kb", "Missing"),
            Err(SourceError::NotFound { sheet }) if sheet == "Missing"
        ));
    }
}
