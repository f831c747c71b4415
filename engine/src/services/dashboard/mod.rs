// engine/src/services/dashboard/mod.rs
// The dashboard controller: owns the record set and period selection, runs uploads and
// projects KPIs and chart series from that state on demand.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use shared::models::{ChartSeries, KpiSummary, PeriodSelection, Record};

use crate::config::settings::EngineSettings;
use crate::data::decoder::SpreadsheetDecoder;
use crate::data::period::filter_period;
use crate::data::preview::{preview_rows, PreviewRow};
use crate::data::sample::sample_records;
use crate::error::EngineError;
use crate::metrics::{compute_kpis, Bundle};

pub mod status;
pub mod upload;

pub use status::{StatusKind, StatusMessage};

/// Where the current record set came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DataSource {
    Sample,
    Upload(PathBuf),
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    pub path: PathBuf,
    pub records: usize,
}

/// Everything the display surfaces render, computed from one consistent state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub period: PeriodSelection,
    pub source: DataSource,
    pub record_count: usize,
    pub active_count: usize,
    pub kpis: KpiSummary,
    pub performance: ChartSeries,
    pub fundamentals: ChartSeries,
}

#[derive(Debug, Clone)]
struct DashboardState {
    records: Vec<Record>,
    period: PeriodSelection,
    source: DataSource,
}

pub struct Dashboard {
    settings: EngineSettings,
    decoder: Arc<dyn SpreadsheetDecoder>,
    state: DashboardState,
}

impl Dashboard {
    /// Starts on the built-in sample dataset with the configured default period.
    pub fn new(
        settings: EngineSettings,
        decoder: Arc<dyn SpreadsheetDecoder>,
    ) -> Result<Self, EngineError> {
        let period = settings.initial_period()?;
        let records = sample_records()?;
        tracing::info!(records = records.len(), %period, "Dashboard initialized with sample data");
        Ok(Dashboard {
            settings,
            decoder,
            state: DashboardState { records, period, source: DataSource::Sample },
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn record_set(&self) -> &[Record] {
        &self.state.records
    }

    pub fn source(&self) -> &DataSource {
        &self.state.source
    }

    pub fn period(&self) -> PeriodSelection {
        self.state.period
    }

    /// The filtered copy of the record set for the current period.
    pub fn active_set(&self) -> Vec<Record> {
        filter_period(&self.state.records, self.state.period)
    }

    /// Replaces the record set with the contents of `path`. On any failure the current
    /// record set and period stay as they were.
    pub async fn upload(&mut self, path: &Path) -> Result<UploadOutcome, EngineError> {
        tracing::info!(path = %path.display(), "Processing upload");
        let records =
            upload::handle_upload(path, &self.settings, Arc::clone(&self.decoder)).await?;

        let outcome = UploadOutcome { path: path.to_path_buf(), records: records.len() };
        self.state = DashboardState {
            records,
            period: PeriodSelection::All,
            source: DataSource::Upload(outcome.path.clone()),
        };
        tracing::info!(path = %path.display(), records = outcome.records, "Record set replaced");
        Ok(outcome)
    }

    /// Like [`Dashboard::upload`], reported as a status message for display.
    pub async fn upload_with_status(&mut self, path: &Path) -> StatusMessage {
        match self.upload(path).await {
            Ok(outcome) => StatusMessage::uploaded(outcome.records),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Upload rejected");
                StatusMessage::from(&e)
            }
        }
    }

    pub fn set_period(&mut self, selection: PeriodSelection) -> StatusMessage {
        self.state.period = selection;
        tracing::debug!(period = %selection, "Period filter changed");
        StatusMessage::filter_applied(selection)
    }

    pub fn view(&self) -> DashboardView {
        let active = self.active_set();
        DashboardView {
            period: self.state.period,
            source: self.state.source.clone(),
            record_count: self.state.records.len(),
            active_count: active.len(),
            kpis: compute_kpis(&active),
            performance: Bundle::Performance.build(&active),
            fundamentals: Bundle::Fundamentals.build(&active),
        }
    }

    pub fn series(&self, bundle: Bundle) -> ChartSeries {
        bundle.build(&self.active_set())
    }

    /// Preview of the full record set, ignoring the period filter.
    pub fn preview(&self) -> Vec<PreviewRow> {
        preview_rows(&self.state.records, self.settings.preview_limit)
    }

    pub fn refresh(&self) -> (DashboardView, StatusMessage) {
        (self.view(), StatusMessage::refreshed())
    }
}
