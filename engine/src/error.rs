use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unsupported input format: '{path}' (accepted: {})", .accepted.join(", "))]
    InputFormat { path: String, accepted: Vec<String> },

    #[error("Failed to decode spreadsheet '{path}': {message}")]
    DecodeFailure { path: String, message: String },

    #[error("Decoding '{path}' timed out after {timeout_ms} ms")]
    DecodeTimeout { path: String, timeout_ms: u64 },

    #[error("No valid records found in '{path}'")]
    EmptyResult { path: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV writing error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// Errors that leave the previously loaded record set in place.
    pub fn is_upload_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::InputFormat { .. }
                | EngineError::DecodeFailure { .. }
                | EngineError::DecodeTimeout { .. }
                | EngineError::EmptyResult { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InputFormat {
            path: "report.pdf".to_string(),
            accepted: vec!["xlsx".to_string(), "xls".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported input format: 'report.pdf' (accepted: xlsx, xls)"
        );
        assert!(err.is_upload_rejection());

        let err = EngineError::ConfigError("bad".to_string());
        assert!(!err.is_upload_rejection());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EngineError = io.into();
        assert!(err.to_string().contains("I/O error"));
    }
}
