//! Core library for the `cityboard` weather dashboard.
//!
//! This crate defines:
//! - Configuration (API key, theme preference)
//! - The city catalogue and search filter
//! - Abstraction over weather providers and the concurrent fetch of a whole dashboard
//! - Formatting helpers for temperatures, wind, visibility and location-local times
//!
//! It is used by `cityboard-cli`, but can also be reused by other front ends.

pub mod city;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod theme;

pub use city::{City, default_cities, filter_cities};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::WeatherError;
pub use model::{CityWeather, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config, provider_from_key};
pub use theme::Theme;
