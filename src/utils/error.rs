use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageGenError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing fields in CSV row {row}: {missing:?}")]
    LeadValidationError { row: usize, missing: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PageGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageGenError::IoError(_) => ErrorCategory::Io,
            PageGenError::CsvError(_) | PageGenError::SerializationError(_) => ErrorCategory::Data,
            PageGenError::ConfigError { .. } | PageGenError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            PageGenError::LeadValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PageGenError::CsvError(e) => format!("The input CSV could not be read: {}", e),
            PageGenError::IoError(e) => format!("A file operation failed: {}", e),
            PageGenError::SerializationError(e) => {
                format!("The ledger JSON could not be processed: {}", e)
            }
            PageGenError::ConfigError { message } => format!("Configuration problem: {}", message),
            PageGenError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            PageGenError::LeadValidationError { row, missing } => format!(
                "CSV row {} is incomplete: missing {}",
                row,
                missing.join(", ")
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PageGenError::CsvError(_) => {
                "Check the input file for malformed CSV near the reported position."
            }
            PageGenError::IoError(_) => {
                "Check that the paths exist and are writable, then run again."
            }
            PageGenError::SerializationError(_) => {
                "Repair or remove the ledger file; a missing ledger is treated as empty."
            }
            PageGenError::ConfigError { .. } => {
                "Review the site configuration file for syntax errors."
            }
            PageGenError::InvalidConfigValueError { .. } => {
                "Adjust the flagged option and run again."
            }
            PageGenError::LeadValidationError { .. } => {
                "Fill in the missing columns in the input CSV, then rerun."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PageGenError>;
