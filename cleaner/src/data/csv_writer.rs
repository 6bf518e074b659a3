// Output side: cleaned records rendered as `Period,Amount` CSV.
use crate::error::{CleanerError, Result};
use csv::{Terminator, WriterBuilder};
use shared::models::CleanedRecord;
use std::fs;
use std::path::Path;

pub const OUTPUT_HEADERS: [&str; 2] = ["Period", "Amount"];

/// Renders the whole document in memory. The header is always present, even with no records.
pub fn render_csv(records: &[CleanedRecord]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(OUTPUT_HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.into_inner()
        .map_err(|e| CleanerError::IoError { source: e.into_error() })
}

/// Overwrites `path` with the rendered records in a single write.
pub fn write_cleaned_csv(path: &Path, records: &[CleanedRecord]) -> Result<()> {
    let bytes = render_csv(records)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(records: &[CleanedRecord]) -> String {
        String::from_utf8(render_csv(records).unwrap()).unwrap()
    }

    #[test]
    fn test_render_formats_amounts() {
        let records = vec![
            CleanedRecord::new("Q1", 1000.5),
            CleanedRecord::new("Q2", 2.0),
            CleanedRecord::new("Q3", 1.234),
        ];
        assert_eq!(render_str(&records), "Period,Amount\nQ1,1000.50\nQ2,2.00\nQ3,1.234\n");
    }

    #[test]
    fn test_render_empty_has_header() {
        assert_eq!(render_str(&[]), "Period,Amount\n");
    }

    #[test]
    fn test_render_quotes_periods_with_commas() {
        let records = vec![CleanedRecord::new("Q1, 2023", 5.0)];
        assert_eq!(render_str(&records), "Period,Amount\n\"Q1, 2023\",5.00\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents that are longer than the output\n").unwrap();

        write_cleaned_csv(&path, &[CleanedRecord::new("FY", 10.0)]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Period,Amount\nFY,10.00\n");
    }

    #[test]
    fn test_write_round_trips_with_naive_split() {
        let records = vec![CleanedRecord::new("Q1", 1000.5), CleanedRecord::new("Q4", 0.125)];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_cleaned_csv(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: Vec<CleanedRecord> = text
            .lines()
            .skip(1)
            .map(|line| {
                let (period, amount) = line.split_once(',').unwrap();
                CleanedRecord::new(period, amount.parse().unwrap())
            })
            .collect();
        assert_eq!(parsed, records);
    }
}
