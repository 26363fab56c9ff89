use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("dataset has no instances")]
    EmptyDataset,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SplitError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        SplitError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
