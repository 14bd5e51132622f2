use serde::{Deserialize, Serialize};

/// The ten bodies tracked by the ephemeris, in pair-iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const fn all() -> &'static [Body; 10] {
        &ALL_BODIES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
        }
    }

    /// Mean longitude at 2000-01-01, in degrees.
    pub const fn base_longitude(self) -> f64 {
        match self {
            Self::Sun => 280.460,
            Self::Moon => 218.316,
            Self::Mercury => 252.251,
            Self::Venus => 181.980,
            Self::Mars => 355.433,
            Self::Jupiter => 34.351,
            Self::Saturn => 50.077,
            Self::Uranus => 314.055,
            Self::Neptune => 304.349,
            Self::Pluto => 238.929,
        }
    }

    /// Mean motion in degrees per day.
    pub const fn daily_motion(self) -> f64 {
        match self {
            Self::Sun => 0.985_647_4,
            Self::Moon => 13.176_396,
            Self::Mercury => 4.092_317,
            Self::Venus => 1.602_136,
            Self::Mars => 0.524_039,
            Self::Jupiter => 0.083_056,
            Self::Saturn => 0.033_371,
            Self::Uranus => 0.011_698,
            Self::Neptune => 0.005_965,
            Self::Pluto => 0.003_964,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
