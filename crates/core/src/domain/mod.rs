pub mod body;
pub mod calendar;
pub mod forecast;
pub mod report;
pub mod zodiac;
