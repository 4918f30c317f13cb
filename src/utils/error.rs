use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Database operation failed: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Subscription task failed: {0}")]
    SubscriptionError(#[from] tokio::task::JoinError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Stream processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::ApiError(_) => ErrorSeverity::Medium,
            AppError::DatabaseError(_) => ErrorSeverity::High,
            AppError::IoError(_) => ErrorSeverity::High,
            AppError::SerializationError(_) => ErrorSeverity::Medium,
            AppError::SubscriptionError(_) => ErrorSeverity::Critical,
            AppError::ConfigValidationError { .. } => ErrorSeverity::Low,
            AppError::InvalidConfigValueError { .. } => ErrorSeverity::Low,
            AppError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(e) => format!("The users endpoint could not be reached: {}", e),
            AppError::DatabaseError(e) => format!("The user store rejected the operation: {}", e),
            AppError::IoError(e) => format!("A file operation failed: {}", e),
            AppError::SerializationError(e) => format!("Report output could not be encoded: {}", e),
            AppError::SubscriptionError(e) => format!("A subscription task died: {}", e),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AppError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            AppError::ProcessingError { message } => {
                format!("A stream pipeline failed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::ApiError(_) => {
                "Check the --api-endpoint URL and your network connection".to_string()
            }
            AppError::DatabaseError(_) => {
                "Check the --database-url value; 'sqlite::memory:' always works".to_string()
            }
            AppError::IoError(_) => "Check file paths and permissions".to_string(),
            AppError::SerializationError(_) => {
                "Re-run without --json to see the raw report".to_string()
            }
            AppError::SubscriptionError(_) => {
                "Re-run with --verbose to see which subscription died".to_string()
            }
            AppError::ConfigValidationError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values".to_string()
            }
            AppError::ProcessingError { .. } => {
                "Re-run with --verbose to see the pipeline logs".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
