use crate::domain::report::{Report, ReportRequest, Summary};
use crate::ephemeris::positions;
use crate::forecast::forecast_month;
use crate::forecast::signal::generate_signal;
use crate::time::month::month_name;
use chrono::{DateTime, Utc};

/// Build the monthly report. Planetary positions are taken at `now`.
pub fn build_report(request: &ReportRequest, now: DateTime<Utc>) -> anyhow::Result<Report> {
    let forecasts = forecast_month(request.year, request.month_index)?;
    let signals = forecasts.iter().map(generate_signal).collect::<Vec<_>>();
    let positions = positions(now.date_naive());
    let summary = Summary::tally(&forecasts);

    tracing::debug!(
        symbol = %request.symbol,
        year = request.year,
        month_index = request.month_index,
        bullish_days = summary.bullish_days,
        bearish_days = summary.bearish_days,
        neutral_days = summary.neutral_days,
        "report assembled"
    );

    Ok(Report {
        symbol: request.symbol.clone(),
        year: request.year,
        month_index: request.month_index,
        month_name: month_name(request.month_index)?.to_string(),
        generated_at: now,
        overall_sentiment: summary.overall_sentiment(),
        risk_level: summary.risk_level(),
        forecasts,
        signals,
        positions,
        summary,
    })
}
