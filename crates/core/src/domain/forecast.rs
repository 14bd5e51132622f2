use crate::domain::body::Body;
use crate::domain::zodiac::ZodiacSign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    #[serde(rename = "Very Strong Bullish")]
    VeryStrongBullish,
    #[serde(rename = "Strong Bullish")]
    StrongBullish,
    #[serde(rename = "Moderate Bullish")]
    ModerateBullish,
    #[serde(rename = "Very Strong Bearish")]
    VeryStrongBearish,
    #[serde(rename = "Strong Bearish")]
    StrongBearish,
    #[serde(rename = "Moderate Bearish")]
    ModerateBearish,
    #[serde(rename = "Significant Neutral")]
    SignificantNeutral,
    #[serde(rename = "Moderate Neutral")]
    ModerateNeutral,
}

impl ImpactLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryStrongBullish => "Very Strong Bullish",
            Self::StrongBullish => "Strong Bullish",
            Self::ModerateBullish => "Moderate Bullish",
            Self::VeryStrongBearish => "Very Strong Bearish",
            Self::StrongBearish => "Strong Bearish",
            Self::ModerateBearish => "Moderate Bearish",
            Self::SignificantNeutral => "Significant Neutral",
            Self::ModerateNeutral => "Moderate Neutral",
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// One day of a monthly forecast. `change` is a signed one-decimal percentage
/// such as `+1.2`, `-0.4` or `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub date: NaiveDate,
    pub day: u32,
    pub event: String,
    pub aspect: String,
    pub sentiment: Sentiment,
    pub change: String,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
    Hold,
}

impl SignalKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => f.pad("High"),
            Self::Medium => f.pad("Medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub date: NaiveDate,
    pub signal: SignalKind,
    pub confidence: Confidence,
    pub reasoning: String,
    pub change: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPosition {
    pub body: Body,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}
