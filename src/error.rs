use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("fibonacci index must be non-negative, got {0}")]
    NegativeIndex(i64),
    #[error("fibonacci index {0} is out of range (max {max})", max = crate::fibonacci::MAX_INDEX)]
    IndexTooLarge(i64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
