// Engine library root: spreadsheet ingestion, KPI and chart series derivation,
// and the dashboard controller tying them together.

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod services;

pub use error::EngineError;
