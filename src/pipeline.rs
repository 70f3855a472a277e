use crate::config::AppConfig;
use crate::error::WeatherError;
use crate::location;
use crate::presenter::{self, DisplayBundle};
use crate::transport::HttpTransport;
use crate::weather;

/// One "Fetch Weather" run: locate, fetch, present.
pub async fn run(transport: HttpTransport, config: AppConfig) -> Result<DisplayBundle, WeatherError> {
    let result = run_stages(&transport, &config).await;
    match &result {
        Ok(bundle) => tracing::info!(
            current_temperature = bundle.current_temperature,
            rows = bundle.filtered_rows.len(),
            "forecast ready"
        ),
        Err(error) => tracing::error!(%error, "weather fetch failed"),
    }
    result
}

async fn run_stages(
    transport: &HttpTransport,
    config: &AppConfig,
) -> Result<DisplayBundle, WeatherError> {
    let coords = location::resolve_location(transport, &config.location_url).await?;
    let series =
        weather::fetch_forecast(transport, &config.forecast_url, coords, config.forecast_days)
            .await?;
    presenter::present(&series)
}
