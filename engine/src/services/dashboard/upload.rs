// Upload pipeline: extension check -> decode (blocking pool, with deadline) -> normalize
use std::path::Path;
use std::sync::Arc;

use shared::models::Record;

use crate::config::settings::EngineSettings;
use crate::data::decoder::SpreadsheetDecoder;
use crate::data::normalizer::normalize;
use crate::error::EngineError;

/// Produces the replacement record set for an upload, or the reason it was rejected.
/// Nothing here touches dashboard state.
pub async fn handle_upload(
    path: &Path,
    settings: &EngineSettings,
    decoder: Arc<dyn SpreadsheetDecoder>,
) -> Result<Vec<Record>, EngineError> {
    let display_path = path.display().to_string();

    if !settings.accepts(path) {
        tracing::warn!(path = %display_path, "Rejected upload with unsupported extension");
        return Err(EngineError::InputFormat {
            path: display_path,
            accepted: settings.accepted_extensions.clone(),
        });
    }

    let owned_path = path.to_path_buf();
    let task = tokio::task::spawn_blocking(move || decoder.decode(&owned_path));
    let rows = match tokio::time::timeout(settings.decode_timeout(), task).await {
        Err(_) => {
            tracing::error!(path = %display_path, timeout_ms = settings.decode_timeout_ms, "Spreadsheet decode timed out");
            return Err(EngineError::DecodeTimeout {
                path: display_path,
                timeout_ms: settings.decode_timeout_ms,
            });
        }
        Ok(Err(join_error)) => {
            tracing::error!(path = %display_path, error_detail = %join_error, "Spreadsheet decode task failed");
            return Err(EngineError::DecodeFailure {
                path: display_path,
                message: join_error.to_string(),
            });
        }
        Ok(Ok(Err(e))) => {
            tracing::error!(path = %display_path, error_detail = ?e, "Spreadsheet decoder returned an error");
            return Err(EngineError::DecodeFailure {
                path: display_path,
                message: format!("{:#}", e),
            });
        }
        Ok(Ok(Ok(rows))) => rows,
    };

    let records = normalize(&rows);
    if records.is_empty() {
        tracing::warn!(path = %display_path, rows = rows.len(), "Upload produced no valid records");
        return Err(EngineError::EmptyResult { path: display_path });
    }
    Ok(records)
}
