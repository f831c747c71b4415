// Built-in fallback dataset shown before any upload
use crate::data::normalizer::normalize;
use crate::error::EngineError;
use shared::models::{RawRow, Record};

const SAMPLE_ROWS: &str = include_str!("../../assets/data/sample.json");

/// Raw rows of the fallback dataset, header included, as a decoder would produce them.
pub fn sample_rows() -> Result<Vec<RawRow>, EngineError> {
    Ok(serde_json::from_str(SAMPLE_ROWS)?)
}

/// The fallback dataset after normalization: eight months, mai./23 to dez./23.
pub fn sample_records() -> Result<Vec<Record>, EngineError> {
    Ok(normalize(&sample_rows()?))
}
