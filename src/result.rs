use crate::error::ValidationError;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Validation(ValidationError),
    DbError(String),
    ObjectStoreError(String),
    ObjectNotFound(String),
    GeocodingError(String),
    LocationUnavailable,
    SubmissionInFlight,
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::DbError(msg) => write!(f, "document store: {}", msg),
            Error::ObjectStoreError(msg) => write!(f, "object store: {}", msg),
            Error::ObjectNotFound(path) => write!(f, "object not found: {}", path),
            Error::GeocodingError(msg) => write!(f, "reverse geocoding: {}", msg),
            Error::LocationUnavailable => write!(f, "device location unavailable"),
            Error::SubmissionInFlight => write!(f, "submission already in progress"),
            Error::ConfigError(msg) => write!(f, "config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DbError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::ObjectStoreError(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::GeocodingError(err.to_string())
    }
}

#[cfg(feature = "pg-storage")]
impl From<tokio_diesel::AsyncError> for Error {
    fn from(err: tokio_diesel::AsyncError) -> Self {
        Self::DbError(err.to_string())
    }
}

#[cfg(feature = "pg-storage")]
impl From<&tokio_diesel::AsyncError> for Error {
    fn from(err: &tokio_diesel::AsyncError) -> Self {
        Self::DbError(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
