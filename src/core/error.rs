//! Error types for the console filter

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown severity name
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// Unknown tier name
    #[error("Invalid tier: '{0}'")]
    InvalidTier(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Output sink failure
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl ConsoleError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        ConsoleError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        ConsoleError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        ConsoleError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsoleError::config("duplicate_suppression", "window must be non-zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for duplicate_suppression: window must be non-zero"
        );

        let err = ConsoleError::sink("memory", "buffer poisoned");
        assert_eq!(err.to_string(), "Sink 'memory' failed: buffer poisoned");

        let err = ConsoleError::InvalidSeverity("fatal".to_string());
        assert_eq!(err.to_string(), "Invalid severity: 'fatal'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ConsoleError::io_operation("reading config", "/etc/console.json", io_err);

        assert!(matches!(err, ConsoleError::IoOperation { .. }));
        assert!(err.to_string().contains("reading config"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
