// Derived metrics: KPI scalars and chart series
pub mod kpi;
pub mod series;

use serde::Serialize;
use shared::models::{Field, Record};
use shared::utils::brazilian_format::{parse_locale_number, parse_locale_percent};

pub use kpi::compute_kpis;
pub use series::{build_series, Bundle};

/// How a column's cells are written in the spreadsheet export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Encoding {
    /// Plain or comma-decimal numbers (accumulated returns).
    Number,
    /// Percent strings such as `"4,25%"` (yield, volatility, gap).
    Percent,
}

/// A named column projected into a numeric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub field: Field,
    pub encoding: Encoding,
}

impl Metric {
    pub const fn new(name: &'static str, field: Field, encoding: Encoding) -> Self {
        Self { name, field, encoding }
    }

    pub fn value(&self, record: &Record) -> f64 {
        let cell = record.get(self.field);
        match self.encoding {
            Encoding::Number => parse_locale_number(cell),
            Encoding::Percent => parse_locale_percent(cell),
        }
    }

    pub fn calculate(&self, records: &[Record]) -> Vec<f64> {
        records.iter().map(|r| self.value(r)).collect()
    }
}
