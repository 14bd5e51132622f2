use crate::domain::forecast::{Confidence, Forecast, SignalKind, TradingSignal};

pub const HOLD_REASONING: &str = "Mixed planetary signals - maintain current positions";

const SIGNAL_THRESHOLD: f64 = 2.0;
const HIGH_CONFIDENCE_THRESHOLD: f64 = 3.0;

/// Parse a signed change such as `+1.2`, `-0.4` or `+3.1%`.
pub fn parse_change(change: &str) -> Option<f64> {
    let s = change.trim();
    let s = s.strip_suffix('%').unwrap_or(s).trim_end();
    let s = s.strip_prefix('+').unwrap_or(s);
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn generate_signal(forecast: &Forecast) -> TradingSignal {
    let value = parse_change(&forecast.change).unwrap_or(0.0);

    let (signal, confidence, reasoning) = if value > SIGNAL_THRESHOLD {
        let confidence = if value > HIGH_CONFIDENCE_THRESHOLD {
            Confidence::High
        } else {
            Confidence::Medium
        };
        (
            SignalKind::Buy,
            confidence,
            format!(
                "Strong bullish planetary influence ({:.1}% expected gain)",
                value.abs()
            ),
        )
    } else if value < -SIGNAL_THRESHOLD {
        let confidence = if value < -HIGH_CONFIDENCE_THRESHOLD {
            Confidence::High
        } else {
            Confidence::Medium
        };
        (
            SignalKind::Sell,
            confidence,
            format!(
                "Strong bearish planetary influence ({:.1}% expected decline)",
                value.abs()
            ),
        )
    } else {
        (SignalKind::Hold, Confidence::Medium, HOLD_REASONING.to_string())
    };

    TradingSignal {
        date: forecast.date,
        signal,
        confidence,
        reasoning,
        change: forecast.change.clone(),
    }
}
