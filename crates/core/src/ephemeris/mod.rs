//! Mean-longitude approximation for the ten tracked bodies.
//!
//! Each longitude is `base + daily_motion * days` measured from 2000-01-01.
//! This is a linear mean-motion model, not a real ephemeris.

pub mod aspect;

use crate::domain::body::Body;
use crate::domain::forecast::PlanetaryPosition;
use crate::domain::zodiac::{normalize_360, resolve_sign};
use crate::time::month::days_since_epoch;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub type Longitudes = BTreeMap<Body, f64>;

pub fn longitude(body: Body, date: NaiveDate) -> f64 {
    let days = days_since_epoch(date) as f64;
    normalize_360(body.base_longitude() + body.daily_motion() * days)
}

pub fn longitudes(date: NaiveDate) -> Longitudes {
    Body::all()
        .iter()
        .map(|body| (*body, longitude(*body, date)))
        .collect()
}

pub fn positions(date: NaiveDate) -> Vec<PlanetaryPosition> {
    longitudes(date)
        .into_iter()
        .map(|(body, lon)| {
            let (sign, degree_in_sign) = resolve_sign(lon);
            PlanetaryPosition {
                body,
                longitude: lon,
                sign,
                degree_in_sign,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn epoch_longitudes_equal_base_values() {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for body in Body::all() {
            assert!((longitude(*body, epoch) - body.base_longitude()).abs() < 1e-12);
        }
    }

    #[test]
    fn longitudes_stay_in_range() {
        let mut date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2060, 1, 1).unwrap();
        while date < end {
            let lons = longitudes(date);
            assert_eq!(lons.len(), 10);
            for (body, lon) in &lons {
                assert!((0.0..360.0).contains(lon), "{body} at {date}: {lon}");
            }
            date += Duration::days(97);
        }
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let d0 = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let d1 = d0.succ_opt().unwrap();
        let delta = normalize_360(longitude(Body::Sun, d1) - longitude(Body::Sun, d0));
        assert!((delta - Body::Sun.daily_motion()).abs() < 1e-9);
    }

    #[test]
    fn positions_cover_all_bodies_in_order() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let out = positions(date);
        let bodies: Vec<Body> = out.iter().map(|p| p.body).collect();
        assert_eq!(bodies, Body::all().to_vec());
        for p in &out {
            assert!((0.0..30.0).contains(&p.degree_in_sign));
            assert!((p.sign.start_deg() + p.degree_in_sign - p.longitude).abs() < 1e-9);
        }
    }
}
