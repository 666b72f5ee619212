use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::{City, CityWeather, WeatherProvider};

/// Every catalogue city with whatever weather could be fetched for it.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub entries: Vec<CityWeather>,
    pub failures: usize,
}

impl Dashboard {
    /// All cities without any weather yet.
    pub fn pending(cities: Vec<City>) -> Self {
        Self {
            entries: cities.into_iter().map(CityWeather::pending).collect(),
            failures: 0,
        }
    }

    /// Request every city at once and wait for the whole batch.
    ///
    /// A failed city keeps an empty snapshot and bumps `failures`; it never
    /// affects the other entries.
    pub async fn fetch(provider: &dyn WeatherProvider, cities: Vec<City>) -> Self {
        let requests = cities.iter().map(|c| provider.current(c.lat, c.lon));
        let results = join_all(requests).await;

        let mut failures = 0;
        let entries = cities
            .into_iter()
            .zip(results)
            .map(|(city, result)| match result {
                Ok(snapshot) => CityWeather {
                    city,
                    snapshot: Some(snapshot),
                },
                Err(err) => {
                    failures += 1;
                    warn!(city = %city.name, error = %err, "failed to fetch weather");
                    CityWeather::pending(city)
                }
            })
            .collect::<Vec<_>>();

        info!(total = entries.len(), failures, "weather batch finished");

        Self { entries, failures }
    }

    /// Entries whose city matches `query`; everything for a blank query.
    pub fn filtered(&self, query: &str) -> Vec<&CityWeather> {
        self.entries.iter().filter(|e| e.city.matches(query)).collect()
    }

    pub fn loaded(&self) -> usize {
        self.entries.iter().filter(|e| e.is_loaded()).count()
    }

    pub fn failure_banner(&self) -> Option<String> {
        match self.failures {
            0 => None,
            1 => Some("Failed to load weather for 1 city".to_string()),
            n => Some(format!("Failed to load weather for {n} cities")),
        }
    }
}
