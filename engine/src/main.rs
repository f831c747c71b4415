// MLUCA dashboard command line entry point
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_engine::config::EngineSettings;
use dashboard_engine::data::decoder::CalamineDecoder;
use dashboard_engine::data::preview::write_preview_csv;
use dashboard_engine::metrics::Bundle;
use dashboard_engine::services::dashboard::{Dashboard, StatusMessage};
use shared::models::PeriodSelection;
use shared::utils::brazilian_format::format_percent;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mluca-dashboard")]
#[command(version, about = "Fund performance dashboard over a monthly spreadsheet export")]
struct Cli {
    /// Settings file (JSON). Embedded defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the KPI summary
    Summary {
        /// Spreadsheet to load (.xlsx or .xls). The sample dataset is used when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Trailing months to include, or "all"
        #[arg(short, long)]
        period: Option<PeriodSelection>,
    },

    /// Print the first records as ;-delimited CSV
    Preview {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print chart-ready series as JSON
    Series {
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(short, long)]
        period: Option<PeriodSelection>,

        #[arg(short, long, value_enum)]
        bundle: BundleArg,

        /// Write to this file (or into this directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BundleArg {
    Performance,
    Fundamentals,
}

impl From<BundleArg> for Bundle {
    fn from(arg: BundleArg) -> Self {
        match arg {
            BundleArg::Performance => Bundle::Performance,
            BundleArg::Fundamentals => Bundle::Fundamentals,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => EngineSettings::load_from_path(path),
        None => EngineSettings::load_default(),
    }
    .context("Failed to load settings")?;

    // Logs go to stderr; stdout carries command output only.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting MLUCA dashboard...");

    let decoder = Arc::new(CalamineDecoder::new(settings.sheet_index));
    let mut dashboard = Dashboard::new(settings, decoder)?;

    match cli.command {
        Commands::Summary { file, period } => {
            load(&mut dashboard, file.as_deref(), period).await;
            print_summary(&dashboard)
        }
        Commands::Preview { file } => {
            load(&mut dashboard, file.as_deref(), None).await;
            write_preview_csv(&dashboard.preview(), io::stdout().lock())?;
            Ok(())
        }
        Commands::Series { file, period, bundle, output } => {
            load(&mut dashboard, file.as_deref(), period).await;
            let bundle = Bundle::from(bundle);
            let series = dashboard.series(bundle);
            let json = serde_json::to_string_pretty(&series)?;
            match output {
                Some(output) => {
                    let path = bundle.export_path(&output);
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write '{}'", path.display()))?;
                    info!(path = %path.display(), "Series written");
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}

// A failed upload leaves the sample data active, as the dashboard does.
async fn load(dashboard: &mut Dashboard, file: Option<&Path>, period: Option<PeriodSelection>) {
    let status = match file {
        Some(path) => dashboard.upload_with_status(path).await,
        None => StatusMessage::sample_loaded(),
    };
    eprintln!("{}", status);

    if let Some(selection) = period {
        let status = dashboard.set_period(selection);
        eprintln!("{}", status);
    }
}

fn print_summary(dashboard: &Dashboard) -> Result<()> {
    let view = dashboard.view();
    let kpis = view.kpis;
    let mut out = io::stdout().lock();

    writeln!(out, "Registros: {} ({} no período {})", view.record_count, view.active_count, view.period)?;
    writeln!(out, "Performance MLUCA: {}", format_percent(kpis.latest_cumulative_return))?;
    writeln!(
        out,
        "vs IBOV: {} ({})",
        format_percent(kpis.relative_vs_benchmark),
        if kpis.outperforms_benchmark() { "acima" } else { "abaixo" }
    )?;
    writeln!(out, "Dividend Yield médio: {}", format_percent(kpis.average_yield))?;
    writeln!(out, "Volatilidade atual: {}", format_percent(kpis.current_volatility))?;
    Ok(())
}
