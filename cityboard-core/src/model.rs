use serde::{Deserialize, Serialize};

use crate::city::City;

/// Current-weather reading for one location, in the shape the OpenWeather
/// `/data/2.5/weather` endpoint returns it (metric units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub name: String,
    /// Observation time, UNIX seconds.
    pub dt: i64,
    /// Seconds to add to UTC to get the location's local time.
    pub timezone: i32,
    /// Metres. The API omits it for some stations.
    #[serde(default)]
    pub visibility: Option<u32>,
    pub main: MainReadings,
    pub wind: Wind,
    pub sys: Sys,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa
    pub pressure: u32,
    /// percent
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// m/s
    pub speed: f64,
    /// meteorological degrees
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

impl WeatherSnapshot {
    /// Short condition group, e.g. "Clear" or "Clouds".
    pub fn condition(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.main.as_str())
            .unwrap_or("Unknown")
    }

    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or("")
    }
}

/// A catalogue city and its snapshot, `None` until fetched (or if the fetch failed).
#[derive(Debug, Clone, Serialize)]
pub struct CityWeather {
    pub city: City,
    pub snapshot: Option<WeatherSnapshot>,
}

impl CityWeather {
    pub fn pending(city: City) -> Self {
        Self {
            city,
            snapshot: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }
}
