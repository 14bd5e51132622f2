use crate::domain::forecast::{Forecast, ImpactLevel, Sentiment};
use crate::domain::report::Report;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One exported forecast row. Field names are the column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Day")]
    pub day: u32,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Planetary_Aspect")]
    pub aspect: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Change_%")]
    pub change: String,
    #[serde(rename = "Impact_Level")]
    pub impact: ImpactLevel,
}

impl From<&Forecast> for ForecastRow {
    fn from(f: &Forecast) -> Self {
        Self {
            date: f.date,
            day: f.day,
            event: f.event.clone(),
            aspect: f.aspect.clone(),
            sentiment: f.sentiment,
            change: f.change.clone(),
            impact: f.impact,
        }
    }
}

pub fn write_report_csv(report: &Report, path: &Path) -> anyhow::Result<usize> {
    let mut writer = ::csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for forecast in &report.forecasts {
        writer
            .serialize(ForecastRow::from(forecast))
            .with_context(|| format!("failed to write row for {}", forecast.date))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        rows = report.forecasts.len(),
        symbol = %report.symbol,
        "forecast csv exported"
    );
    Ok(report.forecasts.len())
}

pub fn read_forecast_rows(path: &Path) -> anyhow::Result<Vec<ForecastRow>> {
    let mut reader = ::csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut out = Vec::new();
    for (idx, row) in reader.deserialize::<ForecastRow>().enumerate() {
        out.push(row.with_context(|| format!("malformed row {} in {}", idx + 1, path.display()))?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ReportRequest;
    use crate::report::build_report;
    use chrono::{TimeZone, Utc};

    fn sample_report() -> Report {
        let req = ReportRequest::try_new("NIFTY", 2025, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        build_report(&req, now).unwrap()
    }

    #[test]
    fn header_matches_export_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_report_csv(&sample_report(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Date,Day,Event,Planetary_Aspect,Sentiment,Change_%,Impact_Level"
        );
        assert!(text.contains(
            "2025-01-01,1,New Year - Mercury sextile Venus,☿ ⚹ ♀,Bullish,+1.2,Moderate Bullish"
        ));
    }

    #[test]
    fn exported_rows_read_back_to_the_same_forecasts() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.csv");

        let written = write_report_csv(&report, &path).unwrap();
        assert_eq!(written, 31);

        let rows = read_forecast_rows(&path).unwrap();
        assert_eq!(rows.len(), report.forecasts.len());
        for (row, f) in rows.iter().zip(&report.forecasts) {
            assert_eq!(row, &ForecastRow::from(f));
            assert_eq!(
                (row.date, row.change.as_str(), row.sentiment, row.impact),
                (f.date, f.change.as_str(), f.sentiment, f.impact)
            );
        }
    }

    #[test]
    fn reading_a_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_forecast_rows(&dir.path().join("missing.csv")).is_err());
    }
}
