use crate::error::WeatherError;
use crate::weather::{ForecastSeries, HourlyReading};
use chrono::Timelike;
use std::fmt::Write;

pub const WARM_THRESHOLD_C: f64 = 25.0;
pub const COLD_THRESHOLD_C: f64 = 10.0;

const TIME_HEADER: &str = "Date/Time";
const TEMPERATURE_HEADER: &str = "temperature_2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Warm,
    Cold,
    Mild,
}

impl Recommendation {
    /// Both thresholds are exclusive, so exactly 25.0 and 10.0 are mild.
    pub fn for_temperature(celsius: f64) -> Self {
        if celsius > WARM_THRESHOLD_C {
            Recommendation::Warm
        } else if celsius < COLD_THRESHOLD_C {
            Recommendation::Cold
        } else {
            Recommendation::Mild
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Warm => "It's sunny and warm! Wear sunglasses.",
            Recommendation::Cold => "It's cold! Wear a jacket.",
            Recommendation::Mild => "Mild weather today, enjoy!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBundle {
    pub current_temperature: f64,
    pub recommendation: Recommendation,
    pub filtered_rows: Vec<HourlyReading>,
}

/// Build what the window shows from a fetched series.
///
/// The first hourly value stands in for the current temperature; the
/// weather service's forecast start is treated as "now".
pub fn present(series: &ForecastSeries) -> Result<DisplayBundle, WeatherError> {
    let current = series.first().ok_or(WeatherError::EmptySeries)?;

    let filtered_rows = series
        .readings()
        .iter()
        .filter(|reading| reading.timestamp.hour() % 2 == 0)
        .copied()
        .collect();

    Ok(DisplayBundle {
        current_temperature: current.temperature,
        recommendation: Recommendation::for_temperature(current.temperature),
        filtered_rows,
    })
}

impl DisplayBundle {
    pub fn summary_text(&self) -> String {
        format!(
            "Current Temperature: {:.1}°C\nRecommendation: {}",
            self.current_temperature,
            self.recommendation.message()
        )
    }

    /// Two-column table for a monospaced font.
    pub fn table_text(&self) -> String {
        let rows: Vec<(String, String)> = self
            .filtered_rows
            .iter()
            .map(|reading| {
                (
                    reading.timestamp.format("%Y-%m-%d %H:%M:%S%:z").to_string(),
                    format!("{:.1}", reading.temperature),
                )
            })
            .collect();

        let time_width = rows
            .iter()
            .map(|(time, _)| time.len())
            .chain(std::iter::once(TIME_HEADER.len()))
            .max()
            .unwrap_or_default();
        let value_width = rows
            .iter()
            .map(|(_, value)| value.len())
            .chain(std::iter::once(TEMPERATURE_HEADER.len()))
            .max()
            .unwrap_or_default();

        let mut table = String::new();
        let _ = writeln!(
            table,
            "{TIME_HEADER:<time_width$}  {TEMPERATURE_HEADER:>value_width$}"
        );
        if rows.is_empty() {
            table.push_str("(no rows)\n");
        }
        for (time, value) in &rows {
            let _ = writeln!(table, "{time:<time_width$}  {value:>value_width$}");
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at_hour(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    fn series(points: &[(u32, f64)]) -> ForecastSeries {
        let readings = points
            .iter()
            .map(|&(hour, temperature)| HourlyReading {
                timestamp: at_hour(hour),
                temperature,
            })
            .collect();
        ForecastSeries::new(readings).unwrap()
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(Recommendation::for_temperature(25.1), Recommendation::Warm);
        assert_eq!(Recommendation::for_temperature(25.0), Recommendation::Mild);
        assert_eq!(Recommendation::for_temperature(17.0), Recommendation::Mild);
        assert_eq!(Recommendation::for_temperature(10.0), Recommendation::Mild);
        assert_eq!(Recommendation::for_temperature(9.9), Recommendation::Cold);
        assert_eq!(Recommendation::for_temperature(-12.0), Recommendation::Cold);
    }

    #[test]
    fn test_single_reading_at_warm_boundary() {
        let bundle = present(&series(&[(0, 25.0)])).unwrap();
        assert_eq!(bundle.current_temperature, 25.0);
        assert_eq!(bundle.recommendation, Recommendation::Mild);
        assert_eq!(bundle.recommendation.message(), "Mild weather today, enjoy!");
    }

    #[test]
    fn test_empty_series() {
        let err = present(&ForecastSeries::default()).unwrap_err();
        assert_eq!(err, WeatherError::EmptySeries);
    }

    #[test]
    fn test_keeps_even_hours_in_order() {
        let bundle = present(&series(&[
            (0, 1.0),
            (1, 2.0),
            (2, 3.0),
            (3, 4.0),
            (4, 5.0),
            (23, 6.0),
        ]))
        .unwrap();

        let hours: Vec<u32> = bundle
            .filtered_rows
            .iter()
            .map(|r| r.timestamp.hour())
            .collect();
        assert_eq!(hours, vec![0, 2, 4]);
        let temps: Vec<f64> = bundle.filtered_rows.iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_first_reading_is_current() {
        let bundle = present(&series(&[(0, 30.0), (1, 22.0), (2, 8.0)])).unwrap();
        assert_eq!(bundle.current_temperature, 30.0);
        assert_eq!(bundle.recommendation, Recommendation::Warm);
        assert_eq!(bundle.filtered_rows.len(), 2);
        assert_eq!(bundle.filtered_rows[0].temperature, 30.0);
        assert_eq!(bundle.filtered_rows[1].temperature, 8.0);
    }

    #[test]
    fn test_summary_text() {
        let bundle = present(&series(&[(5, 4.0)])).unwrap();
        assert_eq!(
            bundle.summary_text(),
            "Current Temperature: 4.0°C\nRecommendation: It's cold! Wear a jacket."
        );
    }

    #[test]
    fn test_table_text() {
        let bundle = present(&series(&[(0, 30.0), (1, 22.0), (2, 8.25)])).unwrap();
        let table = bundle.table_text();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date/Time"));
        assert!(lines[0].ends_with("temperature_2m"));
        assert!(lines[1].starts_with("2024-01-01 00:00:00+00:00"));
        assert!(lines[1].ends_with("30.0"));
        assert!(lines[2].ends_with(" 8.2") || lines[2].ends_with(" 8.3"));
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_table_without_rows() {
        let bundle = present(&series(&[(3, 12.0)])).unwrap();
        assert!(bundle.filtered_rows.is_empty());
        assert!(bundle.table_text().contains("(no rows)"));
    }
}
