use anyhow::Context;
use astrocast_core::config::Settings;
use astrocast_core::domain::report::{Report, ReportRequest};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod display;

#[derive(Debug, Parser)]
#[command(name = "astrocast", about = "Planetary-aspect trading forecast for one month")]
struct Args {
    /// Ticker or commodity symbol. Defaults to ASTROCAST_SYMBOL, then NIFTY.
    #[arg(long)]
    symbol: Option<String>,

    /// Four-digit year. Defaults to ASTROCAST_YEAR, then 2025.
    #[arg(long)]
    year: Option<i32>,

    /// Zero-based month index (0 = January). Defaults to ASTROCAST_MONTH, then 7.
    #[arg(long)]
    month: Option<u32>,

    /// Export forecasts as CSV. Without a path, writes to the export directory.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,

    /// Export the full report as JSON. Without a path, writes to the export directory.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    json: Option<Option<PathBuf>>,

    /// Also print BUY/SELL signals.
    #[arg(long)]
    signals: bool,

    /// Skip console output.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args, &settings) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "forecast run failed");
        return Err(err);
    }
    Ok(())
}

fn run(args: &Args, settings: &Settings) -> anyhow::Result<()> {
    let request = ReportRequest::try_new(
        &settings.resolve_symbol(args.symbol.as_deref()),
        settings.resolve_year(args.year),
        settings.resolve_month_index(args.month),
    )?;

    let report = astrocast_core::report::build_report(&request, chrono::Utc::now())?;
    tracing::info!(
        symbol = %report.symbol,
        month = %report.month_name,
        year = report.year,
        overall = %report.overall_sentiment,
        risk = %report.risk_level,
        "forecast generated"
    );

    if !args.quiet {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        display::render_report(&report, &display::DisplayOptions::from_env(), &mut out)
            .context("failed to write report to stdout")?;
        if args.signals {
            display::render_signals(&report, &mut out)
                .context("failed to write signals to stdout")?;
        }
        out.flush().context("failed to flush stdout")?;
    }

    if let Some(path) = &args.csv {
        let path = export_path(path.as_ref(), settings, &report, "csv");
        astrocast_core::export::csv::write_report_csv(&report, &path)?;
        if !args.quiet {
            println!("\nCSV exported to {}", path.display());
        }
    }

    if let Some(path) = &args.json {
        let path = export_path(path.as_ref(), settings, &report, "json");
        astrocast_core::export::json::write_report_json(&report, &path)?;
        if !args.quiet {
            println!("\nJSON exported to {}", path.display());
        }
    }

    Ok(())
}

fn export_path(
    explicit: Option<&PathBuf>,
    settings: &Settings,
    report: &Report,
    ext: &str,
) -> PathBuf {
    match explicit {
        Some(p) => p.clone(),
        None => settings
            .export_dir()
            .join(astrocast_core::export::default_file_name(report, ext)),
    }
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults_and_optional_export_paths() {
        let args = Args::try_parse_from(["astrocast"]).unwrap();
        assert!(args.symbol.is_none() && args.csv.is_none() && args.json.is_none());

        let args = Args::try_parse_from(["astrocast", "--month", "0", "--csv"]).unwrap();
        assert_eq!(args.month, Some(0));
        assert_eq!(args.csv, Some(None));

        let args = Args::try_parse_from(["astrocast", "--json", "out.json", "--signals"]).unwrap();
        assert_eq!(args.json, Some(Some(PathBuf::from("out.json"))));
        assert!(args.signals);
    }

    #[test]
    fn export_path_falls_back_to_export_dir() {
        let settings = Settings {
            export_dir: Some(PathBuf::from("/tmp/astro")),
            ..Default::default()
        };
        let request = ReportRequest::try_new("NIFTY", 2025, 7).unwrap();
        let report = astrocast_core::report::build_report(&request, chrono::Utc::now()).unwrap();

        assert_eq!(
            export_path(None, &settings, &report, "csv"),
            PathBuf::from("/tmp/astro/NIFTY_astro_forecast_August_2025.csv")
        );
        let explicit = PathBuf::from("x.csv");
        assert_eq!(export_path(Some(&explicit), &settings, &report, "csv"), explicit);
    }
}
