// Turns decoded spreadsheet rows into fixed-shape records
use shared::models::{RawRow, Record};

/// Normalizes decoded rows. `rows[0]` is the header and only sets the field width; every
/// following row whose period is blank or repeats the header label is dropped.
///
/// Fewer than two rows yield no records.
pub fn normalize(rows: &[RawRow]) -> Vec<Record> {
    let Some((headers, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    if data_rows.is_empty() {
        return Vec::new();
    }

    let width = headers.len();
    let records: Vec<Record> = data_rows
        .iter()
        .filter_map(|row| Record::from_cells(row, width))
        .collect();

    tracing::debug!(
        header_width = width,
        rows = data_rows.len(),
        records = records.len(),
        "Normalized spreadsheet rows"
    );
    records
}
