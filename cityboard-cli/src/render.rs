//! Terminal rendering of dashboard entries.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use cityboard_core::{
    City, CityWeather, Theme,
    format::{
        format_clock, format_kmh, format_local_time, format_utc_offset, format_visibility_km,
        wind_direction,
    },
};
use console::Style;

/// Styles for one theme.
pub struct Palette {
    title: Style,
    accent: Style,
    label: Style,
    muted: Style,
    alert: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                title: Style::new().bold().blue(),
                accent: Style::new().magenta(),
                label: Style::new().black(),
                muted: Style::new().dim(),
                alert: Style::new().bold().red(),
            },
            Theme::Dark => Self {
                title: Style::new().bold().cyan(),
                accent: Style::new().yellow(),
                label: Style::new().white(),
                muted: Style::new().dim().white(),
                alert: Style::new().bold().red().bright(),
            },
        }
    }
}

pub fn render_card(entry: &CityWeather, now: DateTime<Utc>, palette: &Palette) -> String {
    let mut out = String::new();
    let heading = format!("{}, {}", entry.city.name, entry.city.country);
    let _ = writeln!(out, "{}", palette.title.apply_to(heading));

    let Some(w) = &entry.snapshot else {
        let _ = writeln!(out, "  {}", palette.muted.apply_to("Loading weather..."));
        return out;
    };

    let label = |s: &str| palette.label.apply_to(format!("{s:<12}")).to_string();

    let _ = writeln!(
        out,
        "  {} {}",
        palette.accent.apply_to(format_clock(now, w.timezone)),
        palette.muted.apply_to(format_utc_offset(w.timezone))
    );
    let _ = writeln!(
        out,
        "  {} {}",
        palette.accent.apply_to(w.condition()),
        w.description()
    );
    let _ = writeln!(
        out,
        "  {}{} °C (feels like {} °C, min {} °C, max {} °C)",
        label("Temperature"),
        w.main.temp,
        w.main.feels_like,
        w.main.temp_min,
        w.main.temp_max
    );
    let _ = writeln!(
        out,
        "  {}{}   {}{}",
        label("Sunrise"),
        format_local_time(w.sys.sunrise, w.timezone),
        label("Sunset"),
        format_local_time(w.sys.sunset, w.timezone)
    );
    let _ = writeln!(out, "  {}{}%", label("Humidity"), w.main.humidity);
    let _ = writeln!(
        out,
        "  {}{} m/s ({}), {}",
        label("Wind"),
        w.wind.speed,
        format_kmh(w.wind.speed),
        wind_direction(w.wind.deg)
    );
    let _ = writeln!(
        out,
        "  {}{}",
        label("Visibility"),
        format_visibility_km(w.visibility)
    );
    let _ = writeln!(out, "  {}{} hPa", label("Pressure"), w.main.pressure);
    out
}

/// Cards for `entries`, followed by the failure banner if any.
pub fn render_dashboard(
    entries: &[&CityWeather],
    banner: Option<&str>,
    now: DateTime<Utc>,
    theme: Theme,
) -> String {
    let palette = Palette::for_theme(theme);
    let mut out = String::new();

    if entries.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            palette.muted.apply_to("No cities match your search.")
        );
    }

    for entry in entries {
        out.push_str(&render_card(entry, now, &palette));
        out.push('\n');
    }

    if let Some(banner) = banner {
        let _ = writeln!(out, "{}", palette.alert.apply_to(banner));
    }
    out
}

/// One line per city with its live local time.
pub fn render_clock_table(entries: &[&CityWeather], now: DateTime<Utc>, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let width = entries
        .iter()
        .map(|e| e.city.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let name = format!("{:<width$}", entry.city.name);
        match &entry.snapshot {
            Some(w) => {
                let _ = writeln!(
                    out,
                    "{}  {:>11}  {}",
                    palette.title.apply_to(name),
                    palette.accent.apply_to(format_clock(now, w.timezone)),
                    palette.muted.apply_to(format_utc_offset(w.timezone))
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{}  {}",
                    palette.title.apply_to(name),
                    palette.muted.apply_to("Loading weather...")
                );
            }
        }
    }
    out
}

pub fn render_city_list(cities: &[&City], theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let mut out = String::new();
    for c in cities {
        let heading = format!("{}, {}", c.name, c.country);
        let coords = format!("({:.4}, {:.4})", c.lat, c.lon);
        let _ = writeln!(
            out,
            "{} {}",
            palette.title.apply_to(heading),
            palette.muted.apply_to(coords)
        );
    }
    out
}
