// Column normalization, schema check and projection onto Period/Amount.
use crate::data::raw_table::RawTable;
use crate::error::{CleanerError, Result};

pub const PERIOD_COLUMN: &str = "Period";
pub const AMOUNT_COLUMN: &str = "Amount";

/// Widest table considered; anything past it is treated as trailing-delimiter noise.
pub const MAX_COLUMNS: usize = 3;

/// The two target cells of one data row, as read.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRow {
    /// 1-based data line (the header is line 1).
    pub line: usize,
    pub period: Option<String>,
    pub amount: Option<String>,
}

pub fn normalize_columns(table: &mut RawTable) -> bool {
    table.truncate_columns(MAX_COLUMNS)
}

pub fn select_target_columns(table: &RawTable) -> Result<Vec<SelectedRow>> {
    let period_idx = table.column_index(PERIOD_COLUMN);
    let amount_idx = table.column_index(AMOUNT_COLUMN);

    let (period_idx, amount_idx) = match (period_idx, amount_idx) {
        (Some(p), Some(a)) => (p, a),
        _ => {
            let missing = [(PERIOD_COLUMN, period_idx), (AMOUNT_COLUMN, amount_idx)]
                .iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(CleanerError::Schema {
                missing,
                available: table.headers().to_vec(),
            });
        }
    };

    Ok((0..table.row_count())
        .map(|row| SelectedRow {
            line: row + 2,
            period: table.cell(row, period_idx).map(str::to_string),
            amount: table.cell(row, amount_idx).map(str::to_string),
        })
        .collect())
}
