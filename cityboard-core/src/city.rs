use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// ISO 3166 alpha-2 code.
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(name: impl Into<String>, country: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            lat,
            lon,
        }
    }

    /// Case-insensitive substring match against the city name or country code.
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self.country.to_lowercase().contains(&needle)
    }
}

/// Cities matching `query`, in their original order.
pub fn filter_cities<'a>(cities: &'a [City], query: &str) -> Vec<&'a City> {
    cities.iter().filter(|c| c.matches(query)).collect()
}

const EGYPT: &[(&str, f64, f64)] = &[
    ("Cairo", 30.0444, 31.2357),
    ("Giza", 30.0131, 31.2089),
    ("Alexandria", 31.2001, 29.9187),
    ("Port Said", 31.2653, 32.3019),
    ("Suez", 29.9668, 32.5498),
    ("Ismailia", 30.6043, 32.2723),
    ("Luxor", 25.6872, 32.6396),
    ("Aswan", 24.0889, 32.8998),
    ("Asyut", 27.18, 31.1837),
    ("Beni Suef", 29.0661, 31.0994),
    ("Faiyum", 29.3084, 30.8418),
    ("Minya", 28.1099, 30.7503),
    ("Sohag", 26.556, 31.6948),
    ("Qena", 26.1551, 32.716),
    ("Hurghada", 27.2579, 33.8116),
    ("Damanhur", 31.0341, 30.4682),
    ("Zagazig", 30.5877, 31.502),
    ("Mansoura", 31.0409, 31.3785),
    ("Tanta", 30.7885, 31.0004),
    ("Shibin El Kom", 30.5526, 30.9963),
    ("Kafr El Sheikh", 31.1107, 30.939),
    ("Marsa Matruh", 31.3543, 27.2373),
    ("Kharga", 25.451, 30.5466),
    ("Arish", 31.1316, 33.7984),
    ("El Tor", 28.241, 33.6222),
    ("Damietta", 31.4165, 31.8133),
    ("Banha", 30.4591, 31.1786),
];

/// The built-in city catalogue.
pub fn default_cities() -> Vec<City> {
    EGYPT
        .iter()
        .map(|&(name, lat, lon)| City::new(name, "EG", lat, lon))
        .collect()
}
