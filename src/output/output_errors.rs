use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}
