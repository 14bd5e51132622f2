pub mod csv;
pub mod json;

use crate::domain::report::Report;

/// `<SYMBOL>_astro_forecast_<Month>_<year>.<ext>`
pub fn default_file_name(report: &Report, ext: &str) -> String {
    format!(
        "{}_astro_forecast_{}_{}.{}",
        report.symbol, report.month_name, report.year, ext
    )
}
