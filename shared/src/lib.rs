pub mod models;
pub mod utils;

// Serialization of CleanedRecord is exercised by the cleaner's CSV writer tests.

#[cfg(test)]
mod tests {
    use crate::models::{CleanReport, CleanedRecord};

    #[test]
    fn report_counts_dropped_rows() {
        let report = CleanReport {
            rows_read: 5,
            non_numeric_dropped: 2,
            missing_dropped: 1,
            rows_written: 2,
            ..Default::default()
        };
        assert_eq!(report.rows_dropped(), 3);
    }

    #[test]
    fn record_new_accepts_str_and_string() {
        let a = CleanedRecord::new("Q1", 1.0);
        let b = CleanedRecord::new(String::from("Q1"), 1.0);
        assert_eq!(a, b);
    }
}
