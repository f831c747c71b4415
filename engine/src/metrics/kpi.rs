// KPI cards: latest return, gap to benchmark, average yield, current volatility
use shared::models::{Field, KpiSummary, Record};
use shared::utils::brazilian_format::{parse_locale_number, parse_locale_percent};

/// Computes the KPI summary of the active set. An empty set yields all zeros.
pub fn compute_kpis(active: &[Record]) -> KpiSummary {
    let Some(last) = active.last() else {
        return KpiSummary::default();
    };

    let latest_cumulative_return = parse_locale_number(last.get(Field::FUND_CUMULATIVE));
    let benchmark = parse_locale_number(last.get(Field::BENCHMARK_CUMULATIVE));

    KpiSummary {
        latest_cumulative_return,
        relative_vs_benchmark: latest_cumulative_return - benchmark,
        average_yield: average_yield(active),
        current_volatility: parse_locale_percent(last.get(Field::VOLATILITY)),
    }
}

// Months without a positive yield are left out of the mean rather than counted as zero.
fn average_yield(active: &[Record]) -> f64 {
    let (sum, count) = active
        .iter()
        .map(|r| parse_locale_percent(r.get(Field::DIVIDEND_YIELD)))
        .filter(|dy| *dy > 0.0)
        .fold((0.0, 0usize), |(sum, count), dy| (sum + dy, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
