pub mod csv_export;
pub mod output_errors;
pub mod report;
