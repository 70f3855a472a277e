mod app;
mod cache;
mod components;
mod config;
mod error;
mod location;
mod pipeline;
mod presenter;
mod transport;
mod view;
mod weather;

use anyhow::Context;
use app::{Flags, WeatherApp};
use config::AppConfig;
use iced::{window, Application, Settings, Size};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use transport::HttpTransport;

/// Optional path to a JSON settings file
const CONFIG_ENV: &str = "WX_NOW_CONFIG";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    let transport =
        HttpTransport::new(&config.transport).context("Failed to set up HTTP transport")?;

    tracing::info!(
        location_url = %config.location_url,
        forecast_url = %config.forecast_url,
        "starting weather window"
    );

    WeatherApp::run(Settings {
        window: window::Settings {
            size: Size::new(600.0, 600.0),
            ..window::Settings::default()
        },
        ..Settings::with_flags(Flags { config, transport })
    })?;
    Ok(())
}
