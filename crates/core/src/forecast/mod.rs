//! Per-day forecast derivation.
//!
//! A day takes its forecast from the event calendar when one is listed.
//! Otherwise the strongest computed aspect decides the sentiment and a
//! date-seeded filler supplies the magnitude.

pub mod signal;

use crate::domain::calendar::{event_on, CalendarEvent};
use crate::domain::forecast::{Forecast, ImpactLevel, Sentiment};
use crate::ephemeris::aspect::{detect_aspects, strongest, Aspect};
use crate::ephemeris::longitudes;
use crate::time::month::month_dates;
use chrono::{Datelike, NaiveDate};
use sha2::{Digest, Sha256};

pub const NO_ASPECT_EVENT: &str = "No major aspects";
pub const NO_ASPECT_LABEL: &str = "-";

/// Largest absolute filler value.
pub const FILLER_MAX: f64 = 0.75;

/// Added to the filler's absolute value on bullish and bearish aspect days.
pub const ASPECT_BOOST: f64 = 0.5;

/// Filler buckets in 0.01 steps across `[-FILLER_MAX, FILLER_MAX]`.
const FILLER_BUCKETS: u64 = 151;

/// Magnitude used when an impact is classified from an unparseable change.
const IMPACT_FALLBACK_MAGNITUDE: f64 = 1.0;

/// Forecasts for every day of a zero-based month.
pub fn forecast_month(year: i32, month_index: u32) -> anyhow::Result<Vec<Forecast>> {
    let dates = month_dates(year, month_index)?;
    Ok(dates.into_iter().map(forecast_day).collect())
}

pub fn forecast_day(date: NaiveDate) -> Forecast {
    match event_on(date.month0(), date.day()) {
        Some(event) => {
            tracing::trace!(%date, event = event.description, "calendar event");
            from_calendar(date, event)
        }
        None => from_aspects(date),
    }
}

fn from_calendar(date: NaiveDate, event: &CalendarEvent) -> Forecast {
    Forecast {
        date,
        day: date.day(),
        event: event.description.to_string(),
        aspect: event.aspect.to_string(),
        sentiment: event.sentiment,
        change: event.change.to_string(),
        impact: classify_impact(event.sentiment, event.change),
    }
}

fn from_aspects(date: NaiveDate) -> Forecast {
    let matches = detect_aspects(&longitudes(date));
    let filler = pseudo_magnitude(date);

    let (event, aspect, sentiment, magnitude) = match strongest(&matches) {
        Some(best) => {
            let sentiment = aspect_sentiment(best.aspect);
            let magnitude = match sentiment {
                Sentiment::Bullish => filler.abs() + ASPECT_BOOST,
                Sentiment::Bearish => -(filler.abs() + ASPECT_BOOST),
                Sentiment::Neutral => filler,
            };
            (best.description(), best.label(), sentiment, magnitude)
        }
        None => (
            NO_ASPECT_EVENT.to_string(),
            NO_ASPECT_LABEL.to_string(),
            Sentiment::Neutral,
            filler,
        ),
    };

    let change = format_change(magnitude);
    let impact = classify_impact(sentiment, &change);
    Forecast {
        date,
        day: date.day(),
        event,
        aspect,
        sentiment,
        change,
        impact,
    }
}

pub fn aspect_sentiment(aspect: Aspect) -> Sentiment {
    match aspect {
        Aspect::Trine | Aspect::Sextile => Sentiment::Bullish,
        Aspect::Square | Aspect::Opposition => Sentiment::Bearish,
        Aspect::Conjunction => Sentiment::Neutral,
    }
}

/// Deterministic filler in `[-FILLER_MAX, FILLER_MAX]`, seeded by the
/// SHA-256 of the `YYYY-MM-DD` string. Carries no predictive meaning.
pub fn pseudo_magnitude(date: NaiveDate) -> f64 {
    let key = date.format("%Y-%m-%d").to_string();
    let digest = Sha256::digest(key.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let bucket = u64::from_be_bytes(head) % FILLER_BUCKETS;
    bucket as f64 / 100.0 - FILLER_MAX
}

/// One decimal with an explicit `+` for positive values. Zero has no sign.
pub fn format_change(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{rounded:.1}")
    } else if rounded < 0.0 {
        format!("{rounded:.1}")
    } else {
        "0.0".to_string()
    }
}

pub fn classify_impact(sentiment: Sentiment, change: &str) -> ImpactLevel {
    let magnitude = signal::parse_change(change)
        .map(f64::abs)
        .unwrap_or(IMPACT_FALLBACK_MAGNITUDE);

    match sentiment {
        Sentiment::Bullish if magnitude > 2.5 => ImpactLevel::VeryStrongBullish,
        Sentiment::Bullish if magnitude > 1.5 => ImpactLevel::StrongBullish,
        Sentiment::Bullish => ImpactLevel::ModerateBullish,
        Sentiment::Bearish if magnitude > 2.5 => ImpactLevel::VeryStrongBearish,
        Sentiment::Bearish if magnitude > 1.5 => ImpactLevel::StrongBearish,
        Sentiment::Bearish => ImpactLevel::ModerateBearish,
        Sentiment::Neutral if magnitude > 1.5 => ImpactLevel::SignificantNeutral,
        Sentiment::Neutral => ImpactLevel::ModerateNeutral,
    }
}
