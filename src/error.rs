use thiserror::Error;

/// Why a data payload could not become a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("data payload is empty")]
    Empty,

    #[error("malformed number '{token}' at position {index}")]
    Malformed { token: String, index: usize },

    #[error("ratio '{text}' has a zero denominator")]
    ZeroDenominator { text: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error("invalid data: {0}")]
    Data(#[from] DataError),

    #[error("option '{option}' expects a number, got '{value}'")]
    InvalidNumber { option: &'static str, value: String },

    #[error("option '{option}' cannot take a {got} value")]
    TypeMismatch { option: &'static str, got: &'static str },

    #[error("invalid fill palette '{value}': {reason}")]
    InvalidFill { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("tag '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("tag '{0}' is not a valid custom element name")]
    InvalidName(String),

    #[error("tag '{0}' is not registered")]
    UnknownTag(String),
}
