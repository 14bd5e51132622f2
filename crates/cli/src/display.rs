use astrocast_core::domain::forecast::{Sentiment, SignalKind};
use astrocast_core::domain::report::Report;
use astrocast_core::forecast::signal::parse_change;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// How many planetary positions to print.
    pub max_positions: usize,

    /// Upper bound on highlighted forecast days.
    pub max_highlights: usize,

    /// Days with `|change|` strictly above this are highlighted.
    pub highlight_threshold: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_positions: 5,
            max_highlights: 10,
            highlight_threshold: 2.0,
        }
    }
}

impl DisplayOptions {
    pub fn from_env() -> Self {
        let mut out = Self::default();

        if let Ok(s) = std::env::var("ASTROCAST_MAX_POSITIONS") {
            if let Ok(n) = s.parse::<usize>() {
                out.max_positions = n;
            }
        }

        if let Ok(s) = std::env::var("ASTROCAST_MAX_HIGHLIGHTS") {
            if let Ok(n) = s.parse::<usize>() {
                out.max_highlights = n;
            }
        }

        if let Ok(s) = std::env::var("ASTROCAST_HIGHLIGHT_THRESHOLD") {
            if let Ok(n) = s.parse::<f64>() {
                out.highlight_threshold = n;
            }
        }

        out
    }
}

fn sentiment_glyph(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bullish => "📈",
        Sentiment::Bearish => "📉",
        Sentiment::Neutral => "➡️",
    }
}

pub fn render_report(
    report: &Report,
    opts: &DisplayOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    let s = &report.summary;
    writeln!(
        out,
        "=== {} astro forecast: {} {} ===",
        report.symbol, report.month_name, report.year
    )?;
    writeln!(
        out,
        "Generated:         {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Overall sentiment: {}", report.overall_sentiment)?;
    writeln!(out, "Risk level:        {}", report.risk_level)?;
    writeln!(
        out,
        "Days:              {} total, {} bullish, {} bearish, {} neutral",
        s.total_days, s.bullish_days, s.bearish_days, s.neutral_days
    )?;

    writeln!(out)?;
    writeln!(out, "Current planetary positions:")?;
    for p in report.positions.iter().take(opts.max_positions) {
        writeln!(
            out,
            "  {} {:<8} {:>7.2}°  {} {:.2}°",
            p.body.symbol(),
            p.body.name(),
            p.longitude,
            p.sign,
            p.degree_in_sign
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Key dates:")?;
    let highlights = report
        .forecasts
        .iter()
        .filter(|f| {
            parse_change(&f.change)
                .map(|v| v.abs() > opts.highlight_threshold)
                .unwrap_or(false)
        })
        .take(opts.max_highlights);

    let mut any = false;
    for f in highlights {
        any = true;
        writeln!(
            out,
            "  {} {} {:>5}%  {} ({}) [{}]",
            sentiment_glyph(f.sentiment),
            f.date,
            f.change,
            f.event,
            f.aspect,
            f.impact
        )?;
    }
    if !any {
        writeln!(out, "  none above ±{:.1}%", opts.highlight_threshold)?;
    }

    Ok(())
}

/// Lists BUY/SELL signals; HOLD days are omitted.
pub fn render_signals(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Trading signals:")?;
    let mut any = false;
    for s in report.signals.iter().filter(|s| s.signal != SignalKind::Hold) {
        any = true;
        writeln!(
            out,
            "  {} {:<4} {:<6} {:>5}%  {}",
            s.date, s.signal, s.confidence, s.change, s.reasoning
        )?;
    }
    if !any {
        writeln!(out, "  HOLD for the whole month")?;
    }
    Ok(())
}
