use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("CSV input is empty")]
    EmptyInputError,

    #[error("CSV must have a header row and at least one data row")]
    MissingDataRowsError,

    #[error("{source_name} is not valid UTF-8 text: {reason}")]
    InvalidEncodingError { source_name: String, reason: String },

    #[error("No valid rows found in CSV ({skipped} skipped)")]
    NoValidRowsError { skipped: usize },

    #[error("Backend rejected bulk import (status {status}): {message}")]
    BackendError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Backend,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::ApiError(_) => ErrorCategory::Network,
            ImportError::BackendError { .. } => ErrorCategory::Backend,
            ImportError::ConfigError { .. }
            | ImportError::MissingConfigError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ImportError::CsvError(_)
            | ImportError::EmptyInputError
            | ImportError::MissingDataRowsError
            | ImportError::InvalidEncodingError { .. }
            | ImportError::NoValidRowsError { .. } => ErrorCategory::Input,
            ImportError::IoError(_) | ImportError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路或後端錯誤可以直接重新提交
            ErrorCategory::Network | ErrorCategory::Backend => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ImportError::ApiError(_) => {
                "Check that the backend is reachable and resubmit the whole file".to_string()
            }
            ImportError::BackendError { status, .. } if *status == 401 || *status == 403 => {
                "Check the API token; bulk import requires an admin account".to_string()
            }
            ImportError::BackendError { .. } => {
                "Fix the reported problem and resubmit the whole file".to_string()
            }
            ImportError::EmptyInputError | ImportError::MissingDataRowsError => {
                "Download a template and add at least one data row below the header".to_string()
            }
            ImportError::InvalidEncodingError { .. } => {
                "Save the file as UTF-8 CSV and try again".to_string()
            }
            ImportError::NoValidRowsError { .. } => {
                "Every row was skipped; fix the rows listed in the warnings above".to_string()
            }
            ImportError::CsvError(_) => "Check the CSV file encoding and structure".to_string(),
            ImportError::ConfigError { .. }
            | ImportError::MissingConfigError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::ConfigValidationError { .. } => {
                "Review the command line flags and configuration file".to_string()
            }
            ImportError::IoError(_) => "Check file paths and permissions".to_string(),
            ImportError::SerializationError(_) => {
                "The backend returned an unexpected response body".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ImportError::ApiError(_) => "Failed to import: the backend could not be reached".to_string(),
            ImportError::BackendError { message, .. } => format!("Failed to import: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
