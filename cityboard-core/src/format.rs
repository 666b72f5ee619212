//! Display helpers for snapshot fields.
//!
//! All time helpers shift a UTC instant by the location's offset and then
//! format the result as a UTC wall clock, so the output never depends on
//! the timezone of the machine running the dashboard.

use chrono::{DateTime, Duration, Utc};

const COMPASS: [&str; 8] = [
    "North",
    "NorthEast",
    "East",
    "SouthEast",
    "South",
    "SouthWest",
    "West",
    "NorthWest",
];

const INVALID_TIME: &str = "--:--";

/// Nearest of the 8 compass points for a meteorological wind bearing.
pub fn wind_direction(deg: f64) -> &'static str {
    if !deg.is_finite() {
        return COMPASS[0];
    }

    let sector = (deg.rem_euclid(360.0) / 45.0).round() as usize % COMPASS.len();
    COMPASS[sector]
}

/// Location-local time of day for a UNIX timestamp, e.g. `6:04 AM`.
pub fn format_local_time(unix: i64, offset_secs: i32) -> String {
    shifted(unix, offset_secs)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| INVALID_TIME.to_string())
}

/// Live clock reading for a location, e.g. `11:42:07 PM`.
pub fn format_clock(now: DateTime<Utc>, offset_secs: i32) -> String {
    (now + Duration::seconds(i64::from(offset_secs)))
        .format("%-I:%M:%S %p")
        .to_string()
}

/// `UTC+02:00`, `UTC-03:30`, `UTC+00:00`.
pub fn format_utc_offset(offset_secs: i32) -> String {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    format!("UTC{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

pub fn mps_to_kmh(speed_mps: f64) -> f64 {
    speed_mps * 3.6
}

pub fn format_kmh(speed_mps: f64) -> String {
    format!("{:.1} km/h", mps_to_kmh(speed_mps))
}

pub fn format_visibility_km(metres: Option<u32>) -> String {
    match metres {
        Some(m) => format!("{:.1} km", f64::from(m) / 1000.0),
        None => "n/a".to_string(),
    }
}

fn shifted(unix: i64, offset_secs: i32) -> Option<DateTime<Utc>> {
    let local = unix.checked_add(i64::from(offset_secs))?;
    DateTime::from_timestamp(local, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn cardinal_and_intercardinal_points() {
        let expected = [
            (0.0, "North"),
            (45.0, "NorthEast"),
            (90.0, "East"),
            (135.0, "SouthEast"),
            (180.0, "South"),
            (225.0, "SouthWest"),
            (270.0, "West"),
            (315.0, "NorthWest"),
        ];
        for (deg, label) in expected {
            assert_eq!(wind_direction(deg), label, "deg = {deg}");
        }
    }

    #[test]
    fn rounds_to_nearest_sector() {
        assert_eq!(wind_direction(22.4), "North");
        assert_eq!(wind_direction(22.5), "NorthEast");
        assert_eq!(wind_direction(337.4), "NorthWest");
        assert_eq!(wind_direction(337.5), "North");
        assert_eq!(wind_direction(359.9), "North");
    }

    #[test]
    fn every_degree_in_range_maps_to_a_label() {
        let mut deg = 0.0;
        while deg < 360.0 {
            let label = wind_direction(deg);
            let sector = COMPASS.iter().position(|c| *c == label).unwrap();
            let centre = sector as f64 * 45.0;
            let distance = (deg - centre).abs().min(360.0 - (deg - centre).abs());
            assert!(distance <= 22.5, "deg = {deg} mapped to {label}");
            deg += 0.25;
        }
    }

    #[test]
    fn out_of_range_bearings_are_normalised() {
        assert_eq!(wind_direction(360.0), "North");
        assert_eq!(wind_direction(450.0), "East");
        assert_eq!(wind_direction(-90.0), "West");
        assert_eq!(wind_direction(f64::NAN), "North");
    }

    #[test]
    fn local_time_applies_offset() {
        // 2023-11-14 22:13:20 UTC
        let ts = 1_700_000_000;
        assert_eq!(format_local_time(ts, 0), "10:13 PM");
        assert_eq!(format_local_time(ts, 7200), "12:13 AM");
        assert_eq!(format_local_time(ts, -5 * 3600), "5:13 PM");
        assert_eq!(format_local_time(ts, 19800), "3:43 AM");
    }

    #[test]
    fn local_time_matches_fixed_offset_clock() {
        let ts = 1_700_000_000;
        for offset in [-36_000, -12_600, 0, 7_200, 19_800, 50_400] {
            let zone = FixedOffset::east_opt(offset).unwrap();
            let expected = DateTime::from_timestamp(ts, 0)
                .unwrap()
                .with_timezone(&zone)
                .format("%-I:%M %p")
                .to_string();
            assert_eq!(format_local_time(ts, offset), expected, "offset = {offset}");
        }
    }

    #[test]
    fn local_time_morning_has_no_leading_zero() {
        // 2023-11-14 04:20:00 UTC
        assert_eq!(format_local_time(1_699_935_600, 7200), "6:20 AM");
    }

    #[test]
    fn local_time_out_of_range_is_placeholder() {
        assert_eq!(format_local_time(i64::MAX, 3600), INVALID_TIME);
        assert_eq!(format_local_time(i64::MAX / 2, 0), INVALID_TIME);
    }

    #[test]
    fn clock_includes_seconds() {
        let now = DateTime::from_timestamp(1_700_000_007, 0).unwrap();
        assert_eq!(format_clock(now, 7200), "12:13:27 AM");
        assert_eq!(format_clock(now, 0), "10:13:27 PM");
    }

    #[test]
    fn offset_labels() {
        assert_eq!(format_utc_offset(7200), "UTC+02:00");
        assert_eq!(format_utc_offset(0), "UTC+00:00");
        assert_eq!(format_utc_offset(-12600), "UTC-03:30");
        assert_eq!(format_utc_offset(20700), "UTC+05:45");
    }

    #[test]
    fn unit_conversions() {
        assert!((mps_to_kmh(10.0) - 36.0).abs() < 1e-9);
        assert_eq!(format_kmh(4.12), "14.8 km/h");
        assert_eq!(format_visibility_km(Some(10000)), "10.0 km");
        assert_eq!(format_visibility_km(Some(2500)), "2.5 km");
        assert_eq!(format_visibility_km(None), "n/a");
    }
}
