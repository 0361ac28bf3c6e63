use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: score {value:?} is not a number")]
    Parse { line: u64, value: String },

    #[error("required column `{0}` is missing from the input header")]
    MissingColumn(&'static str),

    #[error("unknown region code `{0}`")]
    UnknownRegion(String),

    #[error("no rows found for {0}")]
    EmptyGroup(String),

    #[error("invalid answer {value:?} to \"{prompt}\"")]
    InvalidInput { prompt: String, value: String },

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
