//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A message's `Display` implementation reported an error
    #[error("Failed to format log message")]
    FormatError(#[from] std::fmt::Error),

    /// JSON deserialization of format options failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A destination in the fan-out rejected a write
    #[error("Destination #{index} failed: {source}")]
    Destination {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    /// Lookup of a level that is not part of the ladder
    #[error("Unknown log level '{level}'")]
    UnknownLevel { level: String },

    /// Insertion relative to a level that is not part of the ladder
    #[error("Cannot insert level '{level}': reference level '{reference}' not found")]
    MissingReferenceLevel { level: String, reference: String },

    /// Insertion of a level name that already exists
    #[error("Level '{level}' already exists in the ladder")]
    DuplicateLevel { level: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a destination failure error
    pub fn destination(index: usize, source: std::io::Error) -> Self {
        LoggerError::Destination { index, source }
    }

    /// Create an unknown level error
    pub fn unknown_level(level: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            level: level.into(),
        }
    }

    /// Create a missing reference level error
    pub fn missing_reference(level: impl Into<String>, reference: impl Into<String>) -> Self {
        LoggerError::MissingReferenceLevel {
            level: level.into(),
            reference: reference.into(),
        }
    }

    /// Create a duplicate level error
    pub fn duplicate_level(level: impl Into<String>) -> Self {
        LoggerError::DuplicateLevel {
            level: level.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
