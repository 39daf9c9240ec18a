use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Input validation at the pipeline boundary
    #[error("No {source_name} text was provided")]
    EmptyInput { source_name: String },

    #[error("The {source_name} text is too large ({size} bytes, limit {limit} bytes)")]
    InputTooLarge {
        source_name: String,
        size: usize,
        limit: usize,
    },

    // Total extraction failures
    #[error("Could not parse any games from the schedule text")]
    NoGamesParsed,

    #[error("Could not parse any team statistics from the ranking table text")]
    NoStatsParsed,

    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an empty input error for the named input
    pub fn empty_input(source_name: impl Into<String>) -> Self {
        Self::EmptyInput {
            source_name: source_name.into(),
        }
    }

    /// Create an oversized input error for the named input
    pub fn input_too_large(source_name: impl Into<String>, size: usize, limit: usize) -> Self {
        Self::InputTooLarge {
            source_name: source_name.into(),
            size,
            limit,
        }
    }

    /// Check if the error was caused by the pasted text rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyInput { .. }
                | AppError::InputTooLarge { .. }
                | AppError::NoGamesParsed
                | AppError::NoStatsParsed
        )
    }

    /// Check if one of the extractors recognized nothing at all
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, AppError::NoGamesParsed | AppError::NoStatsParsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_empty_input_helper() {
        let error = AppError::empty_input("schedule");
        assert!(matches!(error, AppError::EmptyInput { .. }));
        assert_eq!(error.to_string(), "No schedule text was provided");
    }

    #[test]
    fn test_input_too_large_helper() {
        let error = AppError::input_too_large("statistics", 2048, 1024);
        assert!(matches!(error, AppError::InputTooLarge { .. }));
        assert_eq!(
            error.to_string(),
            "The statistics text is too large (2048 bytes, limit 1024 bytes)"
        );
    }

    #[test]
    fn test_extraction_failure_messages() {
        assert_eq!(
            AppError::NoGamesParsed.to_string(),
            "Could not parse any games from the schedule text"
        );
        assert_eq!(
            AppError::NoStatsParsed.to_string(),
            "Could not parse any team statistics from the ranking table text"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(AppError::empty_input("schedule").is_input_error());
        assert!(AppError::input_too_large("schedule", 10, 5).is_input_error());
        assert!(AppError::NoGamesParsed.is_input_error());
        assert!(AppError::NoStatsParsed.is_input_error());

        assert!(!AppError::config_error("message").is_input_error());
        assert!(!AppError::log_setup_error("message").is_input_error());
        assert!(!AppError::Custom("custom".to_string()).is_input_error());
    }

    #[test]
    fn test_is_extraction_failure() {
        assert!(AppError::NoGamesParsed.is_extraction_failure());
        assert!(AppError::NoStatsParsed.is_extraction_failure());

        assert!(!AppError::empty_input("schedule").is_extraction_failure());
        assert!(!AppError::input_too_large("schedule", 10, 5).is_extraction_failure());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<toml::Table>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::Json(_)));
    }

    #[test]
    fn test_custom_error() {
        let error = AppError::Custom("Custom error message".to_string());
        assert_eq!(error.to_string(), "Custom error message");
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::empty_input("schedule"),
            AppError::input_too_large("statistics", 10, 5),
            AppError::NoGamesParsed,
            AppError::NoStatsParsed,
            AppError::Custom("custom message".to_string()),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
