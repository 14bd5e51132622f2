//! Tropical zodiac signs and longitude-to-sign resolution.
//!
//! The ecliptic is split into twelve contiguous 30 degree segments starting
//! with Aries at 0 degrees.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Ordered by start angle ascending.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

pub const SIGN_SPAN_DEG: f64 = 30.0;

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based position (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * SIGN_SPAN_DEG
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = ((deg % 360.0) + 360.0) % 360.0;
    // -1e-15 % 360 + 360 rounds up to exactly 360.0.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Resolve a longitude to its sign and the degree within that sign.
pub fn resolve_sign(longitude_deg: f64) -> (ZodiacSign, f64) {
    let normalized = normalize_360(longitude_deg);
    for sign in ALL_SIGNS.iter().rev() {
        let start = sign.start_deg();
        if start <= normalized {
            return (*sign, normalized - start);
        }
    }
    (ZodiacSign::Aries, normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_negative_and_large_inputs() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-10);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!(normalize_360(-1e-15) < 360.0);
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(resolve_sign(0.0), (ZodiacSign::Aries, 0.0));
        assert_eq!(resolve_sign(30.0), (ZodiacSign::Taurus, 0.0));
        let (sign, deg) = resolve_sign(359.5);
        assert_eq!(sign, ZodiacSign::Pisces);
        assert!((deg - 29.5).abs() < 1e-10);
    }

    #[test]
    fn negative_longitude_wraps_to_pisces() {
        let (sign, deg) = resolve_sign(-15.0);
        assert_eq!(sign, ZodiacSign::Pisces);
        assert!((deg - 15.0).abs() < 1e-10);
    }

    #[test]
    fn residual_lies_within_segment_for_sweep() {
        let mut deg = -720.0;
        while deg < 720.0 {
            let normalized = normalize_360(deg);
            let (sign, residual) = resolve_sign(deg);
            let start = sign.start_deg();
            let next = start + SIGN_SPAN_DEG;
            assert!(start <= normalized && normalized < next, "deg={deg}");
            assert!((0.0..SIGN_SPAN_DEG).contains(&residual), "deg={deg}");
            assert!((residual - (normalized - start)).abs() < 1e-9);
            deg += 0.37;
        }
    }

    #[test]
    fn segments_partition_the_circle() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index() as usize, i);
            assert_eq!(sign.start_deg(), i as f64 * 30.0);
        }
    }
}
