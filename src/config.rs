//! Calendar configuration: a TOML file, overlaid by command-line flags,
//! resolved into a validated [`CalendarConfig`].

use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::cities::lookup_city;
use crate::error::CalendarError;
use crate::types::{standard_pressure, ExtremalThresholds, Observer};

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 2999;

/// Top-level config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Target year. Defaults to the current year in the configured zone.
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub location: LocationToml,

    #[serde(default)]
    pub thresholds: ThresholdsToml,

    /// Emit the daily sunrise/sunset records.
    #[serde(default = "default_true")]
    pub solar: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            year: None,
            location: LocationToml::default(),
            thresholds: ThresholdsToml::default(),
            solar: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
    pub timezone: Option<String>,
    pub pressure: Option<f64>,
    pub horizon_dip: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsToml {
    #[serde(default = "default_earliest_sunrise")]
    pub earliest_sunrise_hours: f64,
    #[serde(default)]
    pub latest_sunset_hours: f64,
    #[serde(default = "default_min_longest_day")]
    pub min_longest_day_hours: f64,
}

impl Default for ThresholdsToml {
    fn default() -> Self {
        Self {
            earliest_sunrise_hours: default_earliest_sunrise(),
            latest_sunset_hours: 0.0,
            min_longest_day_hours: default_min_longest_day(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_earliest_sunrise() -> f64 {
    24.0
}
fn default_min_longest_day() -> f64 {
    8.0
}

/// Everything one calendar run needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub year: i32,
    pub tz: Tz,
    pub observer: Observer,
    pub thresholds: ExtremalThresholds,
    /// City name, or `lat,lon` for explicit coordinates.
    pub location_name: String,
    pub include_solar: bool,
}

fn invalid(reason: impl Into<String>) -> CalendarError {
    CalendarError::InvalidObserver {
        reason: reason.into(),
    }
}

fn check_finite(name: &str, value: f64) -> Result<f64, CalendarError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, CalendarError> {
    name.parse::<Tz>().map_err(|_| CalendarError::UnknownTimezone {
        name: name.to_string(),
    })
}

pub fn validate_year(year: i32) -> Result<i32, CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::InvalidYear { year })
    }
}

impl ConfigFile {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn resolve(&self) -> Result<CalendarConfig, CalendarError> {
        let loc = &self.location;
        let city = loc.city.as_deref().map(lookup_city).transpose()?;

        let latitude = loc
            .latitude
            .or(city.map(|c| c.latitude))
            .ok_or_else(|| invalid("latitude is required when no city is given"))?;
        let longitude = loc
            .longitude
            .or(city.map(|c| c.longitude))
            .ok_or_else(|| invalid("longitude is required when no city is given"))?;
        let elevation = loc.elevation.or(city.map(|c| c.elevation)).unwrap_or(0.0);

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid(format!("latitude {latitude} outside [-90, 90]")));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid(format!("longitude {longitude} outside [-180, 180]")));
        }
        check_finite("elevation", elevation)?;

        let pressure = check_finite("pressure", loc.pressure.unwrap_or(standard_pressure(elevation)))?;
        if pressure < 0.0 {
            return Err(invalid(format!("pressure must be >= 0, got {pressure}")));
        }
        let horizon_dip = check_finite("horizon_dip", loc.horizon_dip.unwrap_or(0.0))?;

        let tz_name = loc
            .timezone
            .as_deref()
            .or(city.map(|c| c.timezone))
            .ok_or_else(|| invalid("timezone is required when no city is given"))?;
        let tz = parse_timezone(tz_name)?;

        let year = validate_year(
            self.year
                .unwrap_or_else(|| Utc::now().with_timezone(&tz).year()),
        )?;

        let t = &self.thresholds;
        let thresholds = ExtremalThresholds {
            earliest_sunrise_hours: check_finite("earliest_sunrise_hours", t.earliest_sunrise_hours)?,
            latest_sunset_hours: check_finite("latest_sunset_hours", t.latest_sunset_hours)?,
            min_longest_day_hours: check_finite("min_longest_day_hours", t.min_longest_day_hours)?,
        };

        let location_name = match city {
            Some(c) if loc.latitude.is_none() && loc.longitude.is_none() => c.name.to_string(),
            _ => format!("{latitude},{longitude}"),
        };

        Ok(CalendarConfig {
            year,
            tz,
            observer: Observer {
                latitude,
                longitude,
                elevation,
                pressure,
                horizon_dip,
            },
            thresholds,
            location_name,
            include_solar: self.solar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = ConfigFile::from_toml_str(
            r#"
            year = 2023
            solar = false
            [location]
            city = "Seattle"
            pressure = 0.0
            horizon_dip = 0.25
            [thresholds]
            min_longest_day_hours = 10.0
            "#,
        )
        .unwrap();
        let resolved = cfg.resolve().unwrap();
        assert_eq!(resolved.year, 2023);
        assert_eq!(resolved.tz, chrono_tz::America::Los_Angeles);
        assert_eq!(resolved.location_name, "Seattle");
        assert_eq!(resolved.observer.pressure, 0.0);
        assert_eq!(resolved.observer.horizon_dip, 0.25);
        assert_eq!(resolved.thresholds.min_longest_day_hours, 10.0);
        assert_eq!(resolved.thresholds.earliest_sunrise_hours, 24.0);
        assert!(!resolved.include_solar);
    }

    #[test]
    fn empty_file_takes_defaults() {
        let cfg = ConfigFile::from_toml_str("").unwrap();
        assert!(cfg.solar);
        assert!(ConfigFile::default().solar);
        assert_eq!(cfg.thresholds.latest_sunset_hours, 0.0);
        assert_eq!(cfg.thresholds.min_longest_day_hours, 8.0);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ConfigFile::from_toml_str("yaer = 2023").is_err());
        assert!(ConfigFile::from_toml_str("[location]\ncity_name = \"Seattle\"").is_err());
    }

    #[test]
    fn explicit_coordinates_need_timezone() {
        let cfg = ConfigFile::from_toml_str(
            "year = 2023\n[location]\nlatitude = 10.0\nlongitude = 20.0",
        )
        .unwrap();
        assert!(matches!(
            cfg.resolve(),
            Err(CalendarError::InvalidObserver { .. })
        ));
    }

    #[test]
    fn explicit_coordinates_name_location() {
        let cfg = ConfigFile::from_toml_str(
            "year = 2023\n[location]\nlatitude = 10.5\nlongitude = -20.0\ntimezone = \"UTC\"",
        )
        .unwrap();
        let resolved = cfg.resolve().unwrap();
        assert_eq!(resolved.location_name, "10.5,-20");
        assert_eq!(resolved.observer.elevation, 0.0);
        assert!((resolved.observer.pressure - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_year_city_and_timezone() {
        let year = ConfigFile::from_toml_str("year = 3500\n[location]\ncity = \"Seattle\"").unwrap();
        assert!(matches!(
            year.resolve(),
            Err(CalendarError::InvalidYear { year: 3500 })
        ));

        let city = ConfigFile::from_toml_str("year = 2023\n[location]\ncity = \"Atlantis\"").unwrap();
        assert!(matches!(city.resolve(), Err(CalendarError::UnknownCity { .. })));

        let tz = ConfigFile::from_toml_str(
            "year = 2023\n[location]\ncity = \"Seattle\"\ntimezone = \"Mars/Olympus\"",
        )
        .unwrap();
        assert!(matches!(tz.resolve(), Err(CalendarError::UnknownTimezone { .. })));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let cfg = ConfigFile::from_toml_str(
            "year = 2023\n[location]\nlatitude = 91.0\nlongitude = 0.0\ntimezone = \"UTC\"",
        )
        .unwrap();
        assert!(matches!(
            cfg.resolve(),
            Err(CalendarError::InvalidObserver { .. })
        ));
    }

    #[test]
    fn city_lookup_ignores_case() {
        let cfg = ConfigFile::from_toml_str("year = 2023\n[location]\ncity = \"tokyo\"").unwrap();
        let resolved = cfg.resolve().unwrap();
        assert_eq!(resolved.location_name, "Tokyo");
        assert_eq!(resolved.tz, chrono_tz::Asia::Tokyo);
    }
}
