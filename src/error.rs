//! Error types for Cubeta operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Cubeta operations.
///
/// Provides detailed context about failures including invalid
/// hyperparameters, malformed array structure, and persistence errors.
///
/// # Examples
///
/// ```
/// use cubeta::error::CubetaError;
///
/// let err = CubetaError::InvalidHyperparameter {
///     param: "num_bins".to_string(),
///     value: "0".to_string(),
///     constraint: "> 0".to_string(),
/// };
/// assert!(err.to_string().contains("num_bins"));
/// ```
#[derive(Debug)]
pub enum CubetaError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Array structure metadata is inconsistent with its values.
    InvalidStructure {
        /// Description of the inconsistency
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for CubetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubetaError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            CubetaError::InvalidStructure { message } => {
                write!(f, "Invalid array structure: {message}")
            }
            CubetaError::Io(e) => write!(f, "I/O error: {e}"),
            CubetaError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            CubetaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CubetaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CubetaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CubetaError {
    fn from(err: std::io::Error) -> Self {
        CubetaError::Io(err)
    }
}

impl From<serde_json::Error> for CubetaError {
    fn from(err: serde_json::Error) -> Self {
        CubetaError::Serialization(err.to_string())
    }
}

impl From<&str> for CubetaError {
    fn from(msg: &str) -> Self {
        CubetaError::Other(msg.to_string())
    }
}

impl From<String> for CubetaError {
    fn from(msg: String) -> Self {
        CubetaError::Other(msg)
    }
}

/// Convenience result type for Cubeta operations.
pub type Result<T> = std::result::Result<T, CubetaError>;
