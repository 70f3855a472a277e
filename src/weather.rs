use crate::error::FetchError;
use crate::transport::HttpTransport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One hour of forecast, temperature in °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
}

/// Hourly readings in strictly ascending timestamp order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    readings: Vec<HourlyReading>,
}

impl ForecastSeries {
    pub fn new(readings: Vec<HourlyReading>) -> Result<Self, FetchError> {
        if let Some(pair) = readings
            .windows(2)
            .find(|pair| pair[0].timestamp >= pair[1].timestamp)
        {
            return Err(FetchError::MalformedResponse(format!(
                "timestamps not ascending at {}",
                pair[1].timestamp
            )));
        }
        Ok(Self { readings })
    }

    pub fn readings(&self) -> &[HourlyReading] {
        &self.readings
    }

    pub fn first(&self) -> Option<&HourlyReading> {
        self.readings.first()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

// Open-Meteo forecast response, requested with `timeformat=unixtime`
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timezone: Option<String>,
    utc_offset_seconds: Option<i32>,
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<i64>,
    temperature_2m: Vec<Option<f64>>,
}

/// Fetch the hourly temperature forecast for `coords`.
#[tracing::instrument(level = "debug", skip(transport))]
pub async fn fetch_forecast(
    transport: &HttpTransport,
    url: &str,
    coords: Coordinates,
    forecast_days: u8,
) -> Result<ForecastSeries, FetchError> {
    let query = [
        ("latitude", coords.latitude.to_string()),
        ("longitude", coords.longitude.to_string()),
        ("hourly", "temperature_2m".to_string()),
        ("timezone", "auto".to_string()),
        ("timeformat", "unixtime".to_string()),
        ("forecast_days", forecast_days.to_string()),
    ];
    let response: ForecastResponse = transport.get_json(url, &query).await?;

    tracing::debug!(
        timezone = response.timezone.as_deref().unwrap_or("unknown"),
        utc_offset_seconds = response.utc_offset_seconds.unwrap_or_default(),
        "forecast received"
    );

    let hourly = response.hourly.ok_or_else(|| {
        FetchError::MalformedResponse("response has no hourly block".to_string())
    })?;
    let series = parse_hourly(&hourly.time, &hourly.temperature_2m)?;

    tracing::info!(readings = series.len(), "parsed hourly forecast");
    Ok(series)
}

/// Pair epoch-second timestamps with temperatures by position.
pub fn parse_hourly(
    times: &[i64],
    temperatures: &[Option<f64>],
) -> Result<ForecastSeries, FetchError> {
    if times.len() != temperatures.len() {
        return Err(FetchError::MalformedResponse(format!(
            "{} timestamps but {} temperatures",
            times.len(),
            temperatures.len()
        )));
    }
    if times.is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    let readings = times
        .iter()
        .zip(temperatures)
        .map(|(&secs, &temperature)| {
            let timestamp = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                FetchError::MalformedResponse(format!("timestamp {secs} out of range"))
            })?;
            let temperature = temperature.ok_or_else(|| {
                FetchError::MalformedResponse(format!("missing temperature at {timestamp}"))
            })?;
            Ok(HourlyReading {
                timestamp,
                temperature,
            })
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    ForecastSeries::new(readings)
}
