use thiserror::Error;

#[derive(Debug, Error)]
pub enum BezError {
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Continuity violation: {0}")]
    Continuity(String),
}

pub type Result<T> = std::result::Result<T, BezError>;
