// Domain models and locale helpers shared by the engine and its front ends.
pub mod models;
pub mod utils;

pub use models::{
    CellValue, ChartSeries, Field, KpiSummary, PeriodSelection, RawRow, Record, SeriesData,
    FIELD_COUNT, HEADER_SENTINEL,
};
