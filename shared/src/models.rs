use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of positional fields in a normalized row, period label included.
pub const FIELD_COUNT: usize = 19;

/// Localized label of the period column. A data row carrying it is a repeated header.
pub const HEADER_SENTINEL: &str = "Mês";

/// A single spreadsheet cell as handed over by the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Empty cells and empty strings are both blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Blank, zero or NaN. Such a cell carries nothing worth displaying.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            cell => cell.is_blank(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// One decoded spreadsheet row; the first row of an upload is the header.
pub type RawRow = Vec<CellValue>;

/// Positional column of a [`Record`] (1..=18). Field 0 is the period label and lives in
/// [`Record::period`].
///
/// Only the columns the dashboard reads have names. Their meaning is inferred from how the
/// exported spreadsheet is consumed, not from its headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field(u8);

impl Field {
    pub const FUND_QUOTE: Field = Field(1);
    pub const FUND_CUMULATIVE: Field = Field(3);
    pub const BENCHMARK_CUMULATIVE: Field = Field(6);
    pub const RISK_FREE_CUMULATIVE: Field = Field(10);
    pub const VOLATILITY: Field = Field(13);
    pub const DIVIDEND_YIELD: Field = Field(16);
    pub const GAP_RISK: Field = Field(18);

    pub fn new(index: usize) -> Option<Field> {
        (1..FIELD_COUNT).contains(&index).then(|| Field(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A normalized data row with a fixed 19-field layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub period: String,
    values: [CellValue; FIELD_COUNT - 1],
}

impl Record {
    /// Builds a record from positional cells, index 0 being the period.
    ///
    /// Returns `None` when the period is blank, zero or equals [`HEADER_SENTINEL`]. Cells past
    /// `width` (the header width) or past the fixed layout are dropped, missing ones are empty.
    pub fn from_cells(cells: &[CellValue], width: usize) -> Option<Record> {
        let width = width.min(FIELD_COUNT);
        let period = match cells.first() {
            Some(cell) if width > 0 && !cell.is_falsy() => cell.to_string(),
            _ => return None,
        };
        if period == HEADER_SENTINEL {
            return None;
        }

        let mut values: [CellValue; FIELD_COUNT - 1] = Default::default();
        for (slot, cell) in values.iter_mut().zip(cells.iter().take(width).skip(1)) {
            *slot = cell.clone();
        }
        Some(Record { period, values })
    }

    pub fn get(&self, field: Field) -> &CellValue {
        &self.values[field.index() - 1]
    }
}

/// Scalar summary shown in the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    pub latest_cumulative_return: f64,
    pub relative_vs_benchmark: f64,
    pub average_yield: f64,
    pub current_volatility: f64,
}

impl KpiSummary {
    pub fn outperforms_benchmark(&self) -> bool {
        self.relative_vs_benchmark >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart-ready projection: one label per record and one value array per metric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl ChartSeries {
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }
}

/// Trailing window applied to the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodSelection {
    #[default]
    All,
    Trailing(usize),
}

impl FromStr for PeriodSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PeriodSelection::All);
        }
        let months: i64 = s
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid period '{}': {}", s, e))?;
        if months <= 0 {
            Ok(PeriodSelection::All)
        } else {
            Ok(PeriodSelection::Trailing(months as usize))
        }
    }
}

impl fmt::Display for PeriodSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSelection::All => f.write_str("all"),
            PeriodSelection::Trailing(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    #[test]
    fn test_record_pads_missing_cells() {
        let record = Record::from_cells(&row(&["jun./23", "102,5000"]), FIELD_COUNT).unwrap();
        assert_eq!(record.period, "jun./23");
        assert_eq!(record.get(Field::FUND_QUOTE), &CellValue::text("102,5000"));
        assert_eq!(record.get(Field::GAP_RISK), &CellValue::Empty);
    }

    #[test]
    fn test_record_truncates_to_header_width() {
        let record = Record::from_cells(&row(&["jun./23", "a", "b", "c"]), 2).unwrap();
        assert_eq!(record.get(Field::FUND_QUOTE), &CellValue::text("a"));
        assert_eq!(record.get(Field::new(2).unwrap()), &CellValue::Empty);
    }

    #[test]
    fn test_record_rejects_blank_and_sentinel_period() {
        assert!(Record::from_cells(&row(&["", "1"]), 2).is_none());
        assert!(Record::from_cells(&[CellValue::Empty], 1).is_none());
        assert!(Record::from_cells(&row(&["Mês", "MLUCA (cota)"]), 2).is_none());
        assert!(Record::from_cells(&[], FIELD_COUNT).is_none());
    }

    #[test]
    fn test_numeric_period_is_kept_as_text() {
        let record = Record::from_cells(&[CellValue::Number(2023.0)], 1).unwrap();
        assert_eq!(record.period, "2023");
    }

    #[test]
    fn test_zero_or_nan_period_is_dropped() {
        assert!(Record::from_cells(&[CellValue::Number(0.0)], 1).is_none());
        assert!(Record::from_cells(&[CellValue::Number(f64::NAN)], 1).is_none());
        // Text "0" is a real label.
        assert!(Record::from_cells(&row(&["0"]), 1).is_some());
    }

    #[test]
    fn test_field_bounds() {
        assert!(Field::new(0).is_none());
        assert!(Field::new(19).is_none());
        assert_eq!(Field::new(16), Some(Field::DIVIDEND_YIELD));
    }

    #[test]
    fn test_cell_value_untagged_json() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"["4,25%", 2.5, null]"#).unwrap();
        assert_eq!(cells, vec![CellValue::text("4,25%"), CellValue::Number(2.5), CellValue::Empty]);
        assert_eq!(CellValue::Number(108335.0).to_string(), "108335");
    }

    #[test]
    fn test_period_selection_parse() {
        assert_eq!("all".parse::<PeriodSelection>().unwrap(), PeriodSelection::All);
        assert_eq!("12".parse::<PeriodSelection>().unwrap(), PeriodSelection::Trailing(12));
        assert_eq!("0".parse::<PeriodSelection>().unwrap(), PeriodSelection::All);
        assert_eq!("-3".parse::<PeriodSelection>().unwrap(), PeriodSelection::All);
        assert!("six".parse::<PeriodSelection>().is_err());
    }

    #[test]
    fn test_outperformance_classification() {
        let even = KpiSummary { relative_vs_benchmark: 0.0, ..Default::default() };
        let behind = KpiSummary { relative_vs_benchmark: -0.07, ..Default::default() };
        assert!(even.outperforms_benchmark());
        assert!(!behind.outperforms_benchmark());
    }
}
