use crate::error::{CleanerError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Tab-separated input as read from disk: a header row plus ragged data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).fold(headers.len(), usize::max);
        let headers = (0..width)
            .map(|i| match headers.get(i) {
                Some(name) if !name.trim().is_empty() => name.clone(),
                _ => unnamed_column(i),
            })
            .collect();
        RawTable { headers, rows }
    }

    // Header: Period<TAB>Amount[<TAB>...]
    // Example Row: Q1<TAB>$1,000.50<TAB>
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CleanerError::NotFound { path: path.to_path_buf() },
            _ => CleanerError::from(e),
        })?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true) // trailing tabs make rows wider than the header
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(CleanerError::EmptyInput { path: path.to_path_buf() });
        }

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| {
                tracing::error!("Error reading TSV record at line {}: {}", idx + 2, e);
                e
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(RawTable::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Keeps only the first `max` columns. Returns whether anything was cut.
    pub fn truncate_columns(&mut self, max: usize) -> bool {
        if self.headers.len() <= max {
            return false;
        }
        self.headers.truncate(max);
        for row in &mut self.rows {
            row.truncate(max);
        }
        true
    }

    /// First column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// `None` when the row is too short to have this column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(String::as_str)
    }
}

fn unnamed_column(index: usize) -> String {
    format!("Unnamed: {}", index)
}
