use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{operation} overflows for input {input}")]
    OverflowError { operation: String, input: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("Background task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("No async runtime available: {0}")]
    RuntimeUnavailable(#[from] tokio::runtime::TryCurrentError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Computation,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShowcaseError {
    pub fn overflow(operation: &str, input: impl ToString) -> Self {
        Self::OverflowError {
            operation: operation.to_string(),
            input: input.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigParseError(_) | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::OverflowError { .. } | Self::DivisionByZero => ErrorCategory::Computation,
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::TaskFailed(_)
            | Self::RuntimeUnavailable(_) => ErrorCategory::Runtime,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DivisionByZero => ErrorSeverity::Low,
            Self::OverflowError { .. } => ErrorSeverity::Medium,
            Self::ConfigParseError(_)
            | Self::InvalidConfigValueError { .. }
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::TaskFailed(_) | Self::RuntimeUnavailable(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigParseError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::OverflowError { operation, input } => {
                format!("{} cannot be represented for input {}", operation, input)
            }
            Self::DivisionByZero => "Cannot divide by zero".to_string(),
            Self::IoError(e) => format!("A file operation failed: {}", e),
            Self::SerializationError(e) => format!("Could not render a result: {}", e),
            Self::TaskFailed(e) => format!("A background task stopped unexpectedly: {}", e),
            Self::RuntimeUnavailable(_) => {
                "Channel demos must run inside the async runtime".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line flags and the --config file",
            ErrorCategory::Computation => "Use a smaller input value",
            ErrorCategory::Runtime => "Run again with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_computation_error() {
        let err = ShowcaseError::overflow("factorial", 40);
        assert_eq!(err.category(), ErrorCategory::Computation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "factorial overflows for input 40");
    }

    #[test]
    fn test_invalid_value_is_configuration_error() {
        let err = ShowcaseError::InvalidConfigValueError {
            field: "fetch.urls".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("fetch.urls"));
    }
}
