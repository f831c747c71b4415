// Preview table of the first uploaded records
use serde::Serialize;
use shared::models::{CellValue, Field, Record};
use shared::utils::brazilian_format::{format_percent, parse_locale_number, parse_locale_percent};
use std::io::Write;

use crate::error::EngineError;

pub const PREVIEW_HEADERS: [&str; 8] = [
    "Mês",
    "MLUCA (cota)",
    "MLUCA (acc)",
    "IBOV (acc)",
    "CDI (acc)",
    "Vol (ano)",
    "DY(%)",
    "GAP (risco)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    pub period: String,
    pub fund_quote: String,
    pub fund_cumulative: String,
    pub benchmark_cumulative: String,
    pub risk_free_cumulative: String,
    pub volatility: String,
    pub dividend_yield: String,
    pub gap_risk: String,
}

impl PreviewRow {
    pub fn from_record(record: &Record) -> Self {
        PreviewRow {
            period: record.period.clone(),
            fund_quote: record.get(Field::FUND_QUOTE).to_string(),
            fund_cumulative: format_percent(parse_locale_number(record.get(Field::FUND_CUMULATIVE))),
            benchmark_cumulative: format_percent(parse_locale_number(
                record.get(Field::BENCHMARK_CUMULATIVE),
            )),
            risk_free_cumulative: format_percent(parse_locale_number(
                record.get(Field::RISK_FREE_CUMULATIVE),
            )),
            volatility: format_percent(parse_locale_percent(record.get(Field::VOLATILITY))),
            dividend_yield: raw_or_dash(record.get(Field::DIVIDEND_YIELD)),
            gap_risk: raw_or_dash(record.get(Field::GAP_RISK)),
        }
    }

    pub fn columns(&self) -> [&str; 8] {
        [
            self.period.as_str(),
            self.fund_quote.as_str(),
            self.fund_cumulative.as_str(),
            self.benchmark_cumulative.as_str(),
            self.risk_free_cumulative.as_str(),
            self.volatility.as_str(),
            self.dividend_yield.as_str(),
            self.gap_risk.as_str(),
        ]
    }
}

/// First `limit` records of the full record set, formatted for display.
pub fn preview_rows(records: &[Record], limit: usize) -> Vec<PreviewRow> {
    records.iter().take(limit).map(PreviewRow::from_record).collect()
}

/// Writes the preview as `;`-delimited CSV, header line first.
pub fn write_preview_csv<W: Write>(rows: &[PreviewRow], writer: W) -> Result<(), EngineError> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    wtr.write_record(PREVIEW_HEADERS)?;
    for row in rows {
        wtr.write_record(row.columns())?;
    }
    wtr.flush()?;
    Ok(())
}

fn raw_or_dash(cell: &CellValue) -> String {
    if cell.is_falsy() {
        "-".to_string()
    } else {
        cell.to_string()
    }
}
