use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    /// Index, quantity or capacity bound violated.
    OutOfRange,
    /// Operation is illegal for the current state or game.
    InvalidValue,
    /// Unknown pocket or box name.
    KeyNotFound,
    /// Operation does not exist for this generation.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::OutOfRange, message)
    }

    pub(crate) fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::InvalidValue, message)
    }

    pub(crate) fn key_not_found(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::KeyNotFound, message)
    }

    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Unsupported, message)
    }
}
