use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouletteError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RouletteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RouletteError::IoError(_) => ErrorCategory::Io,
            RouletteError::CsvError(_) | RouletteError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            RouletteError::ConfigError { .. }
            | RouletteError::ConfigValidationError { .. }
            | RouletteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RouletteError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RouletteError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the artifacts directory exists and contains the roster file".to_string()
            }
            RouletteError::IoError(_) => {
                "Check file permissions in the artifacts directory".to_string()
            }
            RouletteError::CsvError(_) => {
                "Inspect the previous assigned_pairs_run_*.csv files for broken quoting".to_string()
            }
            RouletteError::ProcessingError { .. } => {
                "Re-run with --verbose and check the roster and run files in the artifacts directory"
                    .to_string()
            }
            RouletteError::ConfigError { .. } | RouletteError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            RouletteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            RouletteError::ValidationError { .. } => {
                "Edit the roster file: one unique name per line, at least two people".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RouletteError::IoError(e) => format!("Could not access a file: {}", e),
            RouletteError::CsvError(e) => format!("Could not read the pairing history: {}", e),
            RouletteError::ValidationError { message } => format!("Invalid roster: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_critical_io_error() {
        let err = RouletteError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "people.txt",
        ));

        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("roster file"));
    }

    #[test]
    fn test_configuration_errors_share_category() {
        let errors = [
            RouletteError::ConfigError {
                message: "bad pattern".to_string(),
            },
            RouletteError::ConfigValidationError {
                field: "toml".to_string(),
                message: "expected a table".to_string(),
            },
            RouletteError::InvalidConfigValueError {
                field: "prefix".to_string(),
                value: "runs/".to_string(),
                reason: "must be a bare file name".to_string(),
            },
        ];

        for err in &errors {
            assert_eq!(err.category(), ErrorCategory::Configuration);
            assert_eq!(err.severity(), ErrorSeverity::High);
        }
        assert!(errors[2].recovery_suggestion().contains("'prefix'"));
    }

    #[test]
    fn test_processing_error_is_medium_data_error() {
        let err = RouletteError::ProcessingError {
            message: "no run can follow assigned_pairs_run_4294967295.csv".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("run files"));
    }

    #[test]
    fn test_validation_error_message() {
        let err = RouletteError::ValidationError {
            message: "duplicate name 'Alice'".to_string(),
        };

        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid roster: duplicate name 'Alice'"
        );
    }
}
