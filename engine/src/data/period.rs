// Trailing-window filter over the record set
use shared::models::{PeriodSelection, Record};

/// Returns an owned copy of the records selected by `selection`.
///
/// A window larger than the record set, or of zero months, selects everything.
pub fn filter_period(records: &[Record], selection: PeriodSelection) -> Vec<Record> {
    match selection {
        PeriodSelection::Trailing(months) if months > 0 => {
            let start = records.len().saturating_sub(months);
            records[start..].to_vec()
        }
        _ => records.to_vec(),
    }
}
