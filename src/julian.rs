//! Julian dates and the TT − UT correction.
//!
//! Ephemeris series below are evaluated in Julian Ephemeris Days (TT); the
//! calendar works in UTC instants. ΔT is the piecewise polynomial fit of
//! Espenak & Meeus, good to a few seconds over 1900–2050 and to minutes
//! across the rest of the supported range.

use chrono::{DateTime, Datelike};

use crate::angles::SECONDS_PER_DAY;
use crate::error::CalendarError;
use crate::types::Instant;

const JD_UNIX_EPOCH: f64 = 2_440_587.5;
pub const J2000: f64 = 2_451_545.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

pub fn jd_from_instant(instant: Instant) -> f64 {
    instant.timestamp_millis() as f64 / (SECONDS_PER_DAY * 1000.0) + JD_UNIX_EPOCH
}

pub fn instant_from_jd(jd: f64) -> Result<Instant, CalendarError> {
    let millis = ((jd - JD_UNIX_EPOCH) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() {
        return Err(CalendarError::provider(format!("non-finite julian date {jd}")));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or_else(|| CalendarError::provider(format!("julian date {jd} out of range")))
}

/// Julian centuries since J2000.0.
pub fn centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Year with fraction, e.g. 2023.5 for early July.
pub fn decimal_year(instant: Instant) -> f64 {
    let year = instant.year();
    year as f64 + (instant.ordinal0() as f64 + 0.5) / crate::angles::days_in_year(year) as f64
}

/// ΔT = TT − UT in seconds at decimal year `y`.
pub fn delta_t_seconds(y: f64) -> f64 {
    match y {
        y if y < 1941.0 => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t * t
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t * t
        }
        y if y < 2150.0 => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
        }
        y => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
    }
}

/// Converts a Julian Ephemeris Day (TT) to a UTC instant.
pub fn instant_from_jde(jde: f64) -> Result<Instant, CalendarError> {
    let approx = instant_from_jd(jde)?;
    let dt = delta_t_seconds(decimal_year(approx));
    instant_from_jd(jde - dt / SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn j2000_is_noon_jan_1_2000() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(jd_from_instant(t), J2000);
        assert_eq!(instant_from_jd(J2000).unwrap(), t);
    }

    #[test]
    fn delta_t_recent_values() {
        // Observed: 63.8 s in 2000, 69.2 s in 2023.
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 0.5);
        assert!((delta_t_seconds(2023.0) - 70.0).abs() < 5.0);
    }

    #[test]
    fn delta_t_is_continuous_at_2005() {
        let before = delta_t_seconds(2004.9999);
        let after = delta_t_seconds(2005.0);
        assert!((before - after).abs() < 1.0, "{before} vs {after}");
    }

    #[test]
    fn jde_is_ahead_of_utc() {
        let jde = 2_460_000.0;
        let utc = instant_from_jde(jde).unwrap();
        let back = jd_from_instant(utc);
        let lag = (jde - back) * SECONDS_PER_DAY;
        assert!(lag > 60.0 && lag < 80.0, "lag={lag}");
    }

    #[test]
    fn non_finite_jd_is_rejected() {
        assert!(instant_from_jd(f64::NAN).is_err());
    }
}
