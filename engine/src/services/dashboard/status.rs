// User-facing status messages (pt-BR), the only way failures reach the display surfaces
use serde::Serialize;
use shared::models::PeriodSelection;
use std::fmt;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }

    pub fn sample_loaded() -> Self {
        Self::info("Dados de exemplo carregados. Faça upload do arquivo MLUCA.xlsx para dados reais.")
    }

    pub fn uploaded(records: usize) -> Self {
        Self::success(format!("Sucesso! {} registros carregados.", records))
    }

    pub fn filter_applied(selection: PeriodSelection) -> Self {
        match selection {
            PeriodSelection::All => Self::success("Filtro aplicado: todos os períodos"),
            PeriodSelection::Trailing(months) => {
                Self::success(format!("Filtro aplicado: {} meses", months))
            }
        }
    }

    pub fn refreshed() -> Self {
        Self::success("Dashboard atualizado com sucesso!")
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&EngineError> for StatusMessage {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::InputFormat { accepted, .. } => {
                let extensions: Vec<String> = accepted.iter().map(|ext| format!(".{}", ext)).collect();
                StatusMessage::error(format!(
                    "Erro: Selecione um arquivo Excel ({})",
                    extensions.join(" ou ")
                ))
            }
            EngineError::DecodeFailure { .. } | EngineError::DecodeTimeout { .. } => {
                StatusMessage::error("Erro ao processar arquivo. Verifique o formato.")
            }
            EngineError::EmptyResult { .. } => {
                StatusMessage::error("Erro: Nenhum dado válido encontrado no arquivo.")
            }
            other => StatusMessage::error(format!("Erro: {}", other)),
        }
    }
}
