//! Hardcoded calendar of notable astronomical events.
//!
//! Only January, February, March and August carry entries. Every other month
//! maps to an empty list and its days are forecast from computed aspects.

use crate::domain::forecast::Sentiment;
use crate::domain::forecast::Sentiment::{Bearish, Bullish, Neutral};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarEvent {
    pub day: u32,
    pub description: &'static str,
    pub aspect: &'static str,
    pub sentiment: Sentiment,
    pub change: &'static str,
}

const fn ev(
    day: u32,
    description: &'static str,
    aspect: &'static str,
    sentiment: Sentiment,
    change: &'static str,
) -> CalendarEvent {
    CalendarEvent {
        day,
        description,
        aspect,
        sentiment,
        change,
    }
}

static JANUARY: [CalendarEvent; 8] = [
    ev(1, "New Year - Mercury sextile Venus", "☿ ⚹ ♀", Bullish, "+1.2"),
    ev(6, "Sun conjunct Pluto", "☉ ☌ ♇", Neutral, "-0.8"),
    ev(10, "Mars opposition Sun", "♂ ☍ ☉", Bearish, "-2.1"),
    ev(13, "Full Moon in Cancer", "☽ ☍ ☉", Neutral, "+0.6"),
    ev(18, "Venus conjunct Saturn", "♀ ☌ ♄", Bearish, "-1.7"),
    ev(21, "Sun enters Aquarius", "☉ → ♒", Neutral, "+0.4"),
    ev(25, "Jupiter trine Venus - Growth Cycle", "♃ △ ♀", Bullish, "+3.1"),
    ev(29, "New Moon in Aquarius", "☽ ☌ ☉", Neutral, "+0.9"),
];

static FEBRUARY: [CalendarEvent; 7] = [
    ev(3, "Mercury square Uranus", "☿ □ ♅", Bearish, "-1.9"),
    ev(8, "Venus sextile Jupiter", "♀ ⚹ ♃", Bullish, "+2.3"),
    ev(12, "Full Moon in Leo", "☽ ☍ ☉", Neutral, "-0.5"),
    ev(17, "Mars square Saturn - Pressure Zone", "♂ □ ♄", Bearish, "-2.8"),
    ev(20, "Sun trine Jupiter", "☉ △ ♃", Bullish, "+1.8"),
    ev(24, "Mercury retrograde begins", "☿ Rx", Bearish, "-1.4"),
    ev(28, "New Moon in Pisces", "☽ ☌ ☉", Neutral, "+0.7"),
];

static MARCH: [CalendarEvent; 6] = [
    ev(1, "Venus retrograde begins", "♀ Rx", Bearish, "-2.2"),
    ev(7, "Jupiter sextile Saturn", "♃ ⚹ ♄", Bullish, "+2.6"),
    ev(14, "Total Lunar Eclipse", "☽ ☍ ☉", Bearish, "-3.4"),
    ev(20, "Spring Equinox - Sun enters Aries", "☉ → ♈", Bullish, "+1.5"),
    ev(24, "Mars trine Neptune", "♂ △ ♆", Bullish, "+1.1"),
    ev(29, "Solar Eclipse in Aries", "☽ ☌ ☉", Bearish, "-2.7"),
];

static AUGUST: [CalendarEvent; 8] = [
    ev(1, "Mercury retrograde in Leo", "☿ Rx", Bearish, "-1.6"),
    ev(5, "Venus trine Mars", "♀ △ ♂", Bullish, "+2.4"),
    ev(9, "Full Moon in Aquarius", "☽ ☍ ☉", Neutral, "+0.8"),
    ev(12, "Venus conjunct Jupiter - Wealth Alignment", "♀ ☌ ♃", Bullish, "+3.6"),
    ev(15, "Independence Day - Sun square Uranus", "☉ □ ♅", Bearish, "-1.3"),
    ev(19, "Mars opposition Saturn", "♂ ☍ ♄", Bearish, "-3.2"),
    ev(23, "New Moon in Virgo", "☽ ☌ ☉", Neutral, "+0.5"),
    ev(28, "Jupiter sextile Mercury", "♃ ⚹ ☿", Bullish, "+2.0"),
];

/// Events for a zero-based month index, ordered by day.
pub fn events_for_month(month_index: u32) -> &'static [CalendarEvent] {
    match month_index {
        0 => &JANUARY,
        1 => &FEBRUARY,
        2 => &MARCH,
        7 => &AUGUST,
        _ => &[],
    }
}

pub fn event_on(month_index: u32, day: u32) -> Option<&'static CalendarEvent> {
    events_for_month(month_index).iter().find(|e| e.day == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_new_year_entry() {
        let e = event_on(0, 1).unwrap();
        assert_eq!(e.description, "New Year - Mercury sextile Venus");
        assert_eq!(e.sentiment, Sentiment::Bullish);
        assert_eq!(e.change, "+1.2");
    }

    #[test]
    fn unlisted_months_are_empty() {
        for month in [3, 4, 5, 6, 8, 9, 10, 11, 12] {
            assert!(events_for_month(month).is_empty(), "month={month}");
        }
        assert!(event_on(4, 1).is_none());
    }

    #[test]
    fn populated_months_are_ordered_with_unique_valid_days() {
        for month in [0, 1, 2, 7] {
            let events = events_for_month(month);
            assert!(!events.is_empty());
            for pair in events.windows(2) {
                assert!(pair[0].day < pair[1].day, "month={month}");
            }
            assert!(events.iter().all(|e| (1..=31).contains(&e.day)));
        }
    }
}
