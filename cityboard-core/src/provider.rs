use crate::{Config, WeatherError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions at the given coordinates.
    async fn current(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the OpenWeather provider from config, optionally against a different host.
pub fn provider_from_config(
    config: &Config,
    base_url: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    provider_from_key(config.api_key(), base_url)
}

/// Construct the OpenWeather provider from an already resolved API key.
pub fn provider_from_key(
    api_key: Option<String>,
    base_url: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `cityboard configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    let provider = match base_url {
        Some(url) => OpenWeatherProvider::with_base_url(api_key, url),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(Box::new(provider))
}
