//! Built-in named locations.

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Metres.
    pub elevation: f64,
    pub timezone: &'static str,
}

#[rustfmt::skip]
pub const CITIES: &[City] = &[
    City { name: "Anchorage", latitude: 61.2181, longitude: -149.9003, elevation: 31.0, timezone: "America/Anchorage" },
    City { name: "Berlin", latitude: 52.5200, longitude: 13.4050, elevation: 34.0, timezone: "Europe/Berlin" },
    City { name: "Chicago", latitude: 41.8781, longitude: -87.6298, elevation: 181.0, timezone: "America/Chicago" },
    City { name: "Denver", latitude: 39.7392, longitude: -104.9903, elevation: 1609.0, timezone: "America/Denver" },
    City { name: "Honolulu", latitude: 21.3069, longitude: -157.8583, elevation: 6.0, timezone: "Pacific/Honolulu" },
    City { name: "London", latitude: 51.5074, longitude: -0.1278, elevation: 11.0, timezone: "Europe/London" },
    City { name: "Los Angeles", latitude: 34.0522, longitude: -118.2437, elevation: 71.0, timezone: "America/Los_Angeles" },
    City { name: "New York", latitude: 40.7128, longitude: -74.0060, elevation: 10.0, timezone: "America/New_York" },
    City { name: "Paris", latitude: 48.8566, longitude: 2.3522, elevation: 35.0, timezone: "Europe/Paris" },
    City { name: "Portland", latitude: 45.5152, longitude: -122.6784, elevation: 15.0, timezone: "America/Los_Angeles" },
    City { name: "San Francisco", latitude: 37.7749, longitude: -122.4194, elevation: 16.0, timezone: "America/Los_Angeles" },
    City { name: "Seattle", latitude: 47.6062, longitude: -122.3321, elevation: 56.0, timezone: "America/Los_Angeles" },
    City { name: "Springfield", latitude: 39.8, longitude: -89.6, elevation: 182.0, timezone: "America/Chicago" },
    City { name: "Sydney", latitude: -33.8688, longitude: 151.2093, elevation: 58.0, timezone: "Australia/Sydney" },
    City { name: "Tokyo", latitude: 35.6762, longitude: 139.6503, elevation: 40.0, timezone: "Asia/Tokyo" },
];

/// Case-insensitive lookup by name.
pub fn lookup_city(name: &str) -> Result<&'static City, CalendarError> {
    CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CalendarError::UnknownCity {
            name: name.to_string(),
        })
}
