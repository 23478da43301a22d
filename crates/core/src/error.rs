#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to write CSV record: {0}")]
    CsvWrite(csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    CsvFlush(std::io::Error),
    #[error("CSV buffer was not valid UTF-8: {0}")]
    CsvUtf8(std::string::FromUtf8Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
