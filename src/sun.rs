//! Sunrise and sunset.
//!
//! Low-precision apparent solar coordinates (about 0.01°) and an iterated
//! hour-angle solution for when the Sun's upper limb meets the observer's
//! horizon.

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::error::CalendarError;
use crate::julian::{centuries, instant_from_jd, jd_from_instant, J2000};
use crate::types::{Instant, Observer};

/// Apparent solar radius in degrees.
pub const SOLAR_SEMIDIAMETER: f64 = 16.0 / 60.0;
/// Refraction at the horizon at 1010 hPa, in degrees.
pub const STANDARD_REFRACTION: f64 = 34.0 / 60.0;

const SIDEREAL_DEGREES_PER_DAY: f64 = 360.985_647;
const CONVERGED_DAYS: f64 = 0.1 / 86_400.0;
const MAX_ITERATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub right_ascension: f64,
    pub declination: f64,
}

pub fn sun_coordinates(jd: f64) -> SunCoordinates {
    let t = centuries(jd);
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = deg_to_rad(357.52911 + 35_999.05029 * t - 0.0001537 * t * t);
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = deg_to_rad(125.04 - 1934.136 * t);
    let lambda = deg_to_rad(l0 + center - 0.00569 - 0.00478 * omega.sin());
    let epsilon = deg_to_rad(23.439291 - 0.0130042 * t + 0.00256 * omega.cos());

    SunCoordinates {
        right_ascension: normalize_angle(rad_to_deg(
            (epsilon.cos() * lambda.sin()).atan2(lambda.cos()),
        )),
        declination: rad_to_deg((epsilon.sin() * lambda.sin()).asin()),
    }
}

/// Greenwich mean sidereal time in degrees.
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let t = centuries(jd);
    normalize_angle(
        280.46061837 + 360.98564736629 * (jd - J2000) + 0.000387933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Altitude of the Sun's centre at the moment its upper limb touches the
/// visible horizon.
pub fn horizon_altitude(observer: &Observer) -> f64 {
    let refraction = STANDARD_REFRACTION * observer.pressure.max(0.0) / 1010.0;
    -(refraction + SOLAR_SEMIDIAMETER) - observer.horizon_dip
}

fn signed_angle(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Rising or setting closest to the transit at `transit_jd`, or `None`
/// when the Sun stays above or below the horizon that day.
fn crossing_near(observer: &Observer, transit_jd: f64, rising: bool) -> Option<f64> {
    let h0 = deg_to_rad(horizon_altitude(observer));
    let (sin_phi, cos_phi) = deg_to_rad(observer.latitude).sin_cos();
    let mut jd = transit_jd + if rising { -0.25 } else { 0.25 };

    for _ in 0..MAX_ITERATIONS {
        let sun = sun_coordinates(jd);
        let (sin_d, cos_d) = deg_to_rad(sun.declination).sin_cos();
        let cos_h0 = (h0.sin() - sin_phi * sin_d) / (cos_phi * cos_d);
        if !(-1.0..=1.0).contains(&cos_h0) {
            return None;
        }
        let half_arc = rad_to_deg(cos_h0.acos());
        let target = if rising { -half_arc } else { half_arc };
        let hour_angle =
            signed_angle(greenwich_sidereal_time(jd) + observer.longitude - sun.right_ascension);
        let step = signed_angle(target - hour_angle) / SIDEREAL_DEGREES_PER_DAY;
        jd += step;
        if step.abs() < CONVERGED_DAYS {
            break;
        }
    }
    Some(jd)
}

/// First sunrise (`rising`) or sunset strictly after `after`.
pub fn next_crossing(
    observer: &Observer,
    after: Instant,
    rising: bool,
) -> Result<Instant, CalendarError> {
    let jd_after = jd_from_instant(after);
    let day0 = (jd_after - 0.5).floor() + 0.5;

    // Compared as instants: `after` may itself be a crossing rounded to the
    // millisecond.
    let mut found: Option<Instant> = None;
    for d in -1..=2 {
        let transit = day0 + d as f64 + 0.5 - observer.longitude / 360.0;
        let Some(jd) = crossing_near(observer, transit, rising) else {
            continue;
        };
        let t = instant_from_jd(jd)?;
        if t > after && found.map_or(true, |best| t < best) {
            found = Some(t);
        }
    }

    found.ok_or_else(|| CalendarError::NoRiseSet {
        date: after.date_naive(),
        kind: if rising { "rise" } else { "set" },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declination_extremes_at_solstices() {
        // 2023-06-21 and 2023-12-22, noon UT.
        let june = sun_coordinates(2_460_117.0);
        let december = sun_coordinates(2_460_301.0);
        assert!((june.declination - 23.44).abs() < 0.05, "{}", june.declination);
        assert!((december.declination + 23.44).abs() < 0.05, "{}", december.declination);
    }

    #[test]
    fn refraction_disabled_at_zero_pressure() {
        let mut obs = Observer::new(47.6, -122.3, 0.0);
        obs.pressure = 0.0;
        assert!((horizon_altitude(&obs) + SOLAR_SEMIDIAMETER).abs() < 1e-12);
    }

    #[test]
    fn horizon_dip_lowers_horizon() {
        let mut obs = Observer::new(47.6, -122.3, 0.0);
        let flat = horizon_altitude(&obs);
        obs.horizon_dip = 0.5;
        assert!((horizon_altitude(&obs) - (flat - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn signed_angle_wraps() {
        assert_eq!(signed_angle(190.0), -170.0);
        assert_eq!(signed_angle(-190.0), 170.0);
        assert_eq!(signed_angle(10.0), 10.0);
    }
}
