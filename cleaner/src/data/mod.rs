pub mod csv_writer;
pub mod raw_table;
