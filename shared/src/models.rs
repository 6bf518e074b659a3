use serde::{Serialize, Serializer};
use std::path::PathBuf;

use crate::utils::amount_format;

/// One cleaned row of the earnings report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedRecord {
    #[serde(rename = "Period")]
    pub period: String,
    #[serde(rename = "Amount", serialize_with = "serialize_amount")]
    pub amount: f64,
}

impl CleanedRecord {
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }
}

fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&amount_format::format_amount(*amount))
}

/// Summary of a single cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanReport {
    pub rows_read: usize,
    pub non_numeric_dropped: usize,
    pub missing_dropped: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

impl CleanReport {
    pub fn rows_dropped(&self) -> usize {
        self.non_numeric_dropped + self.missing_dropped
    }
}
