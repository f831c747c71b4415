// Spreadsheet decoding: file on disk -> raw rows of cell values
use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use shared::models::{CellValue, RawRow};
use shared::utils::brazilian_format;
use std::path::Path;

/// Anything that can turn a spreadsheet file into rows of cells. The first row is the header.
pub trait SpreadsheetDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<Vec<RawRow>>;
}

/// Reads `.xlsx` and `.xls` workbooks through calamine.
#[derive(Debug, Clone, Default)]
pub struct CalamineDecoder {
    sheet_index: usize,
}

impl CalamineDecoder {
    pub fn new(sheet_index: usize) -> Self {
        Self { sheet_index }
    }
}

impl SpreadsheetDecoder for CalamineDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<RawRow>> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook '{}'", path.display()))?;
        let range = workbook
            .worksheet_range_at(self.sheet_index)
            .ok_or_else(|| {
                anyhow!(
                    "Workbook '{}' has no worksheet at index {}",
                    path.display(),
                    self.sheet_index
                )
            })?
            .with_context(|| format!("Failed to read worksheet {}", self.sheet_index))?;

        let rows: Vec<RawRow> = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();
        tracing::debug!(path = %path.display(), rows = rows.len(), "Decoded worksheet");
        Ok(rows)
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Text(v.to_string()),
        // Period columns are often real dates; render them the way the report labels months.
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::Text(brazilian_format::month_label(datetime.date())),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
