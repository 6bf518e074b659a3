// Earnings cleaning pipeline: load -> select -> sanitize -> filter -> persist.

pub mod clean_amounts;
pub mod select_columns;

use crate::data::csv_writer;
use crate::data::raw_table::RawTable;
use crate::error::Result;
use shared::models::CleanReport;
use std::path::Path;
use tracing::{error, info, warn};

const PREVIEW_ROWS: usize = 5;

/// Runs the pipeline and logs any failure instead of returning it.
/// The absence of the output file is the only outward sign that a run failed.
pub fn clean(input_path: &Path, output_path: &Path) {
    if let Err(e) = try_clean(input_path, output_path) {
        error!("{}", e);
    }
}

/// Runs the pipeline. Nothing is written unless every step succeeds.
pub fn try_clean(input_path: &Path, output_path: &Path) -> Result<CleanReport> {
    let mut table = RawTable::load(input_path)?;

    let (rows, cols) = table.shape();
    info!("Original data shape: ({}, {})", rows, cols);
    info!("Columns found: {:?}", table.headers());
    info!("First {} rows of the raw data:", PREVIEW_ROWS);
    for row in table.head(PREVIEW_ROWS) {
        info!("  {}", row.join(" | "));
    }
    info!("Number of columns read: {}", cols);

    if select_columns::normalize_columns(&mut table) {
        let (rows, cols) = table.shape();
        info!(
            "Reduced data to first {} columns. New shape: ({}, {})",
            select_columns::MAX_COLUMNS, rows, cols
        );
    }

    let selected = select_columns::select_target_columns(&table)?;
    info!("Selected 'Period' and 'Amount' columns.");

    let sanitized = clean_amounts::sanitize_amounts(selected);
    info!(
        "Unique values in 'Amount' column after cleaning: {:?}",
        clean_amounts::unique_amounts(&sanitized)
    );

    let (numeric, rejected) = clean_amounts::partition_numeric(sanitized);
    if rejected.is_empty() {
        info!("All 'Amount' entries are numeric.");
    } else {
        warn!("Found non-numeric values in 'Amount' column:");
        for row in &rejected {
            warn!(
                "  line {}: Period={:?} Amount={:?}",
                row.line,
                row.period.as_deref().unwrap_or(""),
                row.amount
            );
        }
        warn!("Removed {} rows with non-numeric 'Amount' values.", rejected.len());
    }

    let coerced = clean_amounts::coerce_amounts(numeric)?;
    info!("Converted 'Amount' column to float.");

    let (records, missing_dropped) = clean_amounts::drop_missing(coerced);
    if missing_dropped > 0 {
        warn!("Removed {} rows due to missing 'Period' or 'Amount' values.", missing_dropped);
    } else {
        info!("No missing values detected in 'Period' or 'Amount' columns.");
    }

    csv_writer::write_cleaned_csv(output_path, &records)?;
    info!("Cleaned data saved to {}", output_path.display());

    Ok(CleanReport {
        rows_read: rows,
        non_numeric_dropped: rejected.len(),
        missing_dropped,
        rows_written: records.len(),
        output_path: output_path.to_path_buf(),
    })
}
