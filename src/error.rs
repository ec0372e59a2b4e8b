//! Error types for the KowLife progression engine

use thiserror::Error;

/// Main error type for the KowLife engine
///
/// Progression itself never fails; these cover configuration loading,
/// predicate parsing and the education/career choices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KowLifeError {
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Event catalog has no events")]
    EmptyCatalog,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Education unavailable: {0}")]
    EducationUnavailable(String),

    #[error("Career unavailable: {0}")]
    CareerUnavailable(String),
}

impl From<serde_json::Error> for KowLifeError {
    fn from(err: serde_json::Error) -> Self {
        KowLifeError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<KowLifeError> for pyo3::PyErr {
    fn from(err: KowLifeError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        let msg = err.to_string();
        match err {
            KowLifeError::InvalidCondition(_)
            | KowLifeError::DeserializationError(_)
            | KowLifeError::InvalidConfig(_)
            | KowLifeError::EmptyCatalog => PyValueError::new_err(msg),
            KowLifeError::UnknownStat(_) => PyKeyError::new_err(msg),
            KowLifeError::EducationUnavailable(_) | KowLifeError::CareerUnavailable(_) => {
                PyRuntimeError::new_err(msg)
            }
        }
    }
}

/// Result type alias for the KowLife engine
pub type Result<T> = std::result::Result<T, KowLifeError>;
