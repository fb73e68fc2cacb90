use thiserror::Error;

/// Errors raised by explicit builder operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("Section index {index} out of range (list has {len} sections)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot drag from empty position {0}")]
    NothingToDrag(usize),
}

pub type BuilderResult<T> = Result<T, BuilderError>;
