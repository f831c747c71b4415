// Chart-ready series: labels plus one value array per metric
use super::{Encoding, Metric};
use serde::Serialize;
use std::path::{Path, PathBuf};
use shared::models::{ChartSeries, Field, Record, SeriesData};

pub const PERFORMANCE_METRICS: [Metric; 4] = [
    Metric::new("MLUCA (acc)", Field::FUND_CUMULATIVE, Encoding::Number),
    Metric::new("IBOV (acc)", Field::BENCHMARK_CUMULATIVE, Encoding::Number),
    Metric::new("CDI (acc)", Field::RISK_FREE_CUMULATIVE, Encoding::Number),
    Metric::new("Vol (ano)", Field::VOLATILITY, Encoding::Percent),
];

pub const FUNDAMENTALS_METRICS: [Metric; 2] = [
    Metric::new("DY (%)", Field::DIVIDEND_YIELD, Encoding::Percent),
    Metric::new("GAP (risco)", Field::GAP_RISK, Encoding::Percent),
];

/// The two fixed chart bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundle {
    Performance,
    Fundamentals,
}

impl Bundle {
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Bundle::Performance => &PERFORMANCE_METRICS,
            Bundle::Fundamentals => &FUNDAMENTALS_METRICS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bundle::Performance => "performance",
            Bundle::Fundamentals => "fundamentals",
        }
    }

    /// File stem used when a chart of this bundle is exported.
    pub fn export_stem(self) -> String {
        format!("mluca-{}-chart", self.as_str())
    }

    /// Where an export lands: `<output>/<export_stem>.json` for a directory, `output` itself
    /// otherwise.
    pub fn export_path(self, output: &Path) -> PathBuf {
        if output.is_dir() {
            output.join(format!("{}.json", self.export_stem()))
        } else {
            output.to_path_buf()
        }
    }

    pub fn build(self, active: &[Record]) -> ChartSeries {
        build_series(active, self.metrics())
    }
}

/// Projects the active set into labels and one series per metric, all of equal length.
pub fn build_series(active: &[Record], metrics: &[Metric]) -> ChartSeries {
    ChartSeries {
        labels: active.iter().map(|r| r.period.clone()).collect(),
        series: metrics
            .iter()
            .map(|metric| SeriesData {
                name: metric.name.to_string(),
                values: metric.calculate(active),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::period::filter_period;
    use crate::data::sample::sample_records;
    use shared::models::PeriodSelection;

    #[test]
    fn test_performance_bundle_on_sample() {
        let records = sample_records().unwrap();
        let chart = Bundle::Performance.build(&records);

        assert_eq!(chart.labels.first().map(String::as_str), Some("mai./23"));
        assert_eq!(chart.labels.last().map(String::as_str), Some("dez./23"));
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.get("MLUCA (acc)").unwrap()[7], 10.5);
        assert_eq!(chart.get("IBOV (acc)").unwrap()[7], 10.57);
        assert_eq!(chart.get("CDI (acc)").unwrap()[7], 7.94);
        assert_eq!(chart.get("Vol (ano)").unwrap()[1], 15.0);
    }

    #[test]
    fn test_fundamentals_bundle_on_trailing_window() {
        let records = sample_records().unwrap();
        let active = filter_period(&records, PeriodSelection::Trailing(2));
        let chart = Bundle::Fundamentals.build(&active);

        assert_eq!(chart.labels, vec!["nov./23", "dez./23"]);
        assert_eq!(chart.get("DY (%)").unwrap(), &[4.68, 4.92]);
        assert_eq!(chart.get("GAP (risco)").unwrap(), &[5.2, 4.8]);
    }

    #[test]
    fn test_series_lengths_match_labels() {
        let records = sample_records().unwrap();
        let selections = [
            PeriodSelection::All,
            PeriodSelection::Trailing(3),
            PeriodSelection::Trailing(6),
        ];
        for selection in selections {
            let active = filter_period(&records, selection);
            for bundle in [Bundle::Performance, Bundle::Fundamentals] {
                let chart = bundle.build(&active);
                assert!(chart.series.iter().all(|s| s.values.len() == chart.labels.len()));
            }
        }
    }

    #[test]
    fn test_empty_active_set() {
        let chart = build_series(&[], &PERFORMANCE_METRICS);
        assert!(chart.labels.is_empty());
        assert!(chart.series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn test_series_follow_requested_order() {
        let records = sample_records().unwrap();
        let chart = build_series(&records, &[FUNDAMENTALS_METRICS[1], PERFORMANCE_METRICS[0]]);
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["GAP (risco)", "MLUCA (acc)"]);
    }

    #[test]
    fn test_export_stem() {
        assert_eq!(Bundle::Performance.export_stem(), "mluca-performance-chart");
    }

    #[test]
    fn test_export_path_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Bundle::Fundamentals.export_path(dir.path()),
            dir.path().join("mluca-fundamentals-chart.json")
        );
    }

    #[test]
    fn test_export_path_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.json");
        assert_eq!(Bundle::Performance.export_path(&target), target);
    }
}
