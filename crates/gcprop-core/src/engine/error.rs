use thiserror::Error;

/// Which side of a request/response exchange is responsible for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Client,
    Server,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Structure notation is required")]
    Missing,

    #[error("Structure notation must not be empty")]
    Empty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Internal estimation error: {0}")]
    Internal(String),
}

impl EstimationError {
    pub fn class(&self) -> ErrorClass {
        match self {
            EstimationError::Input(_) => ErrorClass::Client,
            EstimationError::Internal(_) => ErrorClass::Server,
        }
    }
}
