// Engine settings, loaded from an embedded default or a JSON file
use crate::error::EngineError;
use serde::Deserialize;
use shared::models::PeriodSelection;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    /// Lower-case file extensions accepted for upload, without the dot.
    pub accepted_extensions: Vec<String>,
    pub decode_timeout_ms: u64,
    /// Worksheet read from the workbook (0-based).
    pub sheet_index: usize,
    pub preview_limit: usize,
    pub default_period: String,
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            accepted_extensions: vec!["xlsx".to_string(), "xls".to_string()],
            decode_timeout_ms: 30_000,
            sheet_index: 0,
            preview_limit: 10,
            default_period: "all".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load_default() -> Result<Self, EngineError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(config_str)
            .map_err(|e| EngineError::ConfigError(format!("Invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn decode_timeout(&self) -> Duration {
        Duration::from_millis(self.decode_timeout_ms)
    }

    pub fn initial_period(&self) -> Result<PeriodSelection, EngineError> {
        self.default_period
            .parse()
            .map_err(|e| EngineError::ConfigError(format!("default_period: {}", e)))
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.accepted_extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.accepted_extensions.is_empty() {
            return Err(EngineError::ConfigError(
                "accepted_extensions must not be empty".to_string(),
            ));
        }
        if self.decode_timeout_ms == 0 {
            return Err(EngineError::ConfigError(
                "decode_timeout_ms must be greater than 0".to_string(),
            ));
        }
        self.initial_period().map(|_| ())
    }
}
