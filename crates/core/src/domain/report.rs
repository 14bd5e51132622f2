use crate::domain::forecast::{Forecast, PlanetaryPosition, Sentiment, TradingSignal};
use anyhow::ensure;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub symbol: String,
    pub year: i32,
    /// Zero-based (0 = January).
    pub month_index: u32,
}

impl ReportRequest {
    pub fn try_new(symbol: &str, year: i32, month_index: u32) -> anyhow::Result<Self> {
        let symbol = symbol.trim().to_ascii_uppercase();
        ensure!(!symbol.is_empty(), "symbol must be non-empty");
        ensure!(
            (1000..=9999).contains(&year),
            "year must have four digits (got {year})"
        );
        ensure!(
            month_index < 12,
            "month index must be 0..=11 (got {month_index})"
        );

        Ok(Self {
            symbol,
            year,
            month_index,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_bearish_days(bearish_days: usize) -> Self {
        if bearish_days > 15 {
            Self::High
        } else if bearish_days > 10 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_days: usize,
    pub bullish_days: usize,
    pub bearish_days: usize,
    pub neutral_days: usize,
}

impl Summary {
    pub fn tally(forecasts: &[Forecast]) -> Self {
        let mut out = Self {
            total_days: forecasts.len(),
            ..Default::default()
        };
        for f in forecasts {
            match f.sentiment {
                Sentiment::Bullish => out.bullish_days += 1,
                Sentiment::Bearish => out.bearish_days += 1,
                Sentiment::Neutral => out.neutral_days += 1,
            }
        }
        out
    }

    /// Majority of bullish vs bearish days; a tie is neutral.
    pub fn overall_sentiment(&self) -> Sentiment {
        use std::cmp::Ordering;
        match self.bullish_days.cmp(&self.bearish_days) {
            Ordering::Greater => Sentiment::Bullish,
            Ordering::Less => Sentiment::Bearish,
            Ordering::Equal => Sentiment::Neutral,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_bearish_days(self.bearish_days)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub symbol: String,
    pub year: i32,
    pub month_index: u32,
    pub month_name: String,
    pub generated_at: DateTime<Utc>,
    pub overall_sentiment: Sentiment,
    pub risk_level: RiskLevel,
    pub forecasts: Vec<Forecast>,
    pub signals: Vec<TradingSignal>,
    pub positions: Vec<PlanetaryPosition>,
    pub summary: Summary,
}
