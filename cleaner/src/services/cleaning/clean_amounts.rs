// Amount sanitization, numeric validation, coercion and missing-value filtering.
use super::select_columns::SelectedRow;
use crate::error::{CleanerError, Result};
use shared::models::CleanedRecord;
use shared::utils::amount_format;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedRow {
    pub line: usize,
    pub period: Option<String>,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoercedRow {
    pub line: usize,
    pub period: Option<String>,
    pub amount: f64,
}

/// A missing Amount cell sanitizes to the empty string, which never validates.
pub fn sanitize_amounts(rows: Vec<SelectedRow>) -> Vec<SanitizedRow> {
    rows.into_iter()
        .map(|row| SanitizedRow {
            line: row.line,
            period: row.period,
            amount: row.amount.as_deref().map(amount_format::sanitize_amount).unwrap_or_default(),
        })
        .collect()
}

/// Distinct amounts in first-seen order.
pub fn unique_amounts(rows: &[SanitizedRow]) -> Vec<&str> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| row.amount.as_str())
        .filter(|amount| seen.insert(*amount))
        .collect()
}

/// Splits rows into (numeric, rejected), preserving order within each.
pub fn partition_numeric(rows: Vec<SanitizedRow>) -> (Vec<SanitizedRow>, Vec<SanitizedRow>) {
    rows.into_iter()
        .partition(|row| amount_format::is_plain_decimal(&row.amount))
}

pub fn coerce_amounts(rows: Vec<SanitizedRow>) -> Result<Vec<CoercedRow>> {
    rows.into_iter()
        .map(|row| {
            let amount = amount_format::parse_amount(&row.amount).map_err(|e| {
                tracing::debug!("Amount coercion failed on line {}: {}", row.line, e);
                CleanerError::Parse { line: row.line, value: row.amount.clone() }
            })?;
            Ok(CoercedRow { line: row.line, period: row.period, amount })
        })
        .collect()
}

/// Returns the surviving records and how many rows lacked a Period.
pub fn drop_missing(rows: Vec<CoercedRow>) -> (Vec<CleanedRecord>, usize) {
    let total = rows.len();
    let records: Vec<CleanedRecord> = rows
        .into_iter()
        .filter_map(|row| match row.period {
            Some(period) if !period.is_empty() => Some(CleanedRecord::new(period, row.amount)),
            _ => None,
        })
        .collect();
    let dropped = total - records.len();
    (records, dropped)
}
