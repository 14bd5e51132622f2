//! Pairwise aspect detection between body longitudes.

use crate::domain::body::Body;
use crate::ephemeris::Longitudes;
use serde::{Deserialize, Serialize};

/// Maximum deviation from an exact aspect angle, in degrees.
pub const ASPECT_ORB: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Iteration order for detection.
pub const ALL_ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
];

impl Aspect {
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Conjunction => "☌",
            Self::Sextile => "⚹",
            Self::Square => "□",
            Self::Trine => "△",
            Self::Opposition => "☍",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub first: Body,
    pub second: Body,
    pub aspect: Aspect,
    pub separation: f64,
    /// `ASPECT_ORB - |separation - angle|`, in [0, ASPECT_ORB].
    pub strength: f64,
}

impl AspectMatch {
    /// e.g. `♀ △ ♂`
    pub fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.first.symbol(),
            self.aspect.glyph(),
            self.second.symbol()
        )
    }

    /// e.g. `Venus trine Mars`
    pub fn description(&self) -> String {
        format!(
            "{} {} {}",
            self.first.name(),
            self.aspect.name(),
            self.second.name()
        )
    }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// All aspect matches, in pair order then aspect order. Not deduplicated.
pub fn detect_aspects(longitudes: &Longitudes) -> Vec<AspectMatch> {
    let entries: Vec<(Body, f64)> = longitudes.iter().map(|(b, l)| (*b, *l)).collect();
    let mut out = Vec::new();

    for (i, (first, lon_a)) in entries.iter().enumerate() {
        for (second, lon_b) in &entries[i + 1..] {
            let sep = separation(*lon_a, *lon_b);
            for aspect in ALL_ASPECTS {
                let deviation = (sep - aspect.angle()).abs();
                if deviation <= ASPECT_ORB {
                    out.push(AspectMatch {
                        first: *first,
                        second: *second,
                        aspect,
                        separation: sep,
                        strength: ASPECT_ORB - deviation,
                    });
                }
            }
        }
    }

    out
}

/// Strongest match; the first one wins on ties.
pub fn strongest(matches: &[AspectMatch]) -> Option<&AspectMatch> {
    let mut best: Option<&AspectMatch> = None;
    for m in matches {
        match best {
            Some(b) if m.strength <= b.strength => {}
            _ => best = Some(m),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::longitudes;
    use chrono::{Duration, NaiveDate};

    fn lons(pairs: &[(Body, f64)]) -> Longitudes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn separation_is_folded_into_half_circle() {
        assert_eq!(separation(10.0, 350.0), 20.0);
        assert_eq!(separation(0.0, 180.0), 180.0);
        assert_eq!(separation(90.0, 90.0), 0.0);
        assert_eq!(separation(300.0, 50.0), 110.0);
    }

    #[test]
    fn exact_trine_scores_full_orb() {
        let matches = detect_aspects(&lons(&[(Body::Venus, 10.0), (Body::Mars, 130.0)]));
        assert_eq!(matches.len(), 1);
        let m = matches[0];
        assert_eq!(m.aspect, Aspect::Trine);
        assert_eq!((m.first, m.second), (Body::Venus, Body::Mars));
        assert!((m.strength - ASPECT_ORB).abs() < 1e-12);
        assert_eq!(m.label(), "♀ △ ♂");
        assert_eq!(m.description(), "Venus trine Mars");
    }

    #[test]
    fn edge_of_orb_matches_with_near_zero_strength() {
        let matches = detect_aspects(&lons(&[(Body::Sun, 0.0), (Body::Moon, 97.9)]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].aspect, Aspect::Square);
        assert!(matches[0].strength < 0.2);

        let none = detect_aspects(&lons(&[(Body::Sun, 0.0), (Body::Moon, 45.0)]));
        assert!(none.is_empty());
    }

    #[test]
    fn matches_follow_pair_iteration_order() {
        let matches = detect_aspects(&lons(&[
            (Body::Sun, 0.0),
            (Body::Moon, 60.0),
            (Body::Mercury, 180.0),
        ]));
        let pairs: Vec<(Body, Body, Aspect)> =
            matches.iter().map(|m| (m.first, m.second, m.aspect)).collect();
        assert_eq!(
            pairs,
            vec![
                (Body::Sun, Body::Moon, Aspect::Sextile),
                (Body::Sun, Body::Mercury, Aspect::Opposition),
                (Body::Moon, Body::Mercury, Aspect::Trine),
            ]
        );
    }

    #[test]
    fn strongest_prefers_first_on_ties() {
        let matches = detect_aspects(&lons(&[
            (Body::Sun, 0.0),
            (Body::Moon, 60.0),
            (Body::Mercury, 180.0),
        ]));
        // All three are exact, so the first pair wins.
        let best = strongest(&matches).unwrap();
        assert_eq!((best.first, best.second), (Body::Sun, Body::Moon));
        assert!(strongest(&[]).is_none());
    }

    #[test]
    fn every_match_is_within_orb_over_many_dates() {
        let mut date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        for _ in 0..400 {
            for m in detect_aspects(&longitudes(date)) {
                assert!((0.0..=180.0).contains(&m.separation));
                assert!((0.0..=ASPECT_ORB).contains(&m.strength));
                assert!((m.separation - m.aspect.angle()).abs() <= ASPECT_ORB);
            }
            date += Duration::days(11);
        }
    }
}
