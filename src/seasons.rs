//! Instants of the equinoxes and solstices.
//!
//! Mean-season polynomial for the year, corrected by the 24 periodic terms
//! of the Earth's orbit. Accurate to about a minute for years 1000–2999.

use chrono::Datelike;

use crate::angles::deg_to_rad;
use crate::error::CalendarError;
use crate::julian::{instant_from_jde, J2000};
use crate::types::{Instant, Season};

/// Mean-season coefficients in Y = (year - 2000) / 1000, years 1000–2999.
#[rustfmt::skip]
const MEAN_MODERN: [[f64; 5]; 4] = [
    [2_451_623.80984, 365_242.37404,  0.05169, -0.00411, -0.00057],
    [2_451_716.56767, 365_241.62603,  0.00325,  0.00888, -0.00030],
    [2_451_810.21715, 365_242.01767, -0.11575,  0.00337,  0.00078],
    [2_451_900.05952, 365_242.74049, -0.06223, -0.00823,  0.00032],
];

/// Mean-season coefficients in Y = year / 1000, years before 1000.
#[rustfmt::skip]
const MEAN_ANCIENT: [[f64; 5]; 4] = [
    [1_721_139.29189, 365_242.13740,  0.06134,  0.00111, -0.00071],
    [1_721_233.25401, 365_241.72562, -0.05323,  0.00907,  0.00025],
    [1_721_325.70455, 365_242.49558, -0.11677, -0.00297,  0.00074],
    [1_721_414.39987, 365_242.88257, -0.00769, -0.00933, -0.00006],
];

/// (amplitude, phase, rate per Julian century).
#[rustfmt::skip]
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136), (203.0, 337.23, 32964.467),
    (199.0, 342.08, 20.186), (182.0, 27.85, 445267.112),
    (156.0, 73.14, 45036.886), (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934), (74.0, 296.72, 3034.906),
    (70.0, 243.58, 9037.513), (58.0, 119.81, 33718.147),
    (52.0, 297.17, 150.678), (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562), (44.0, 325.15, 31555.956),
    (29.0, 60.93, 4443.417), (18.0, 155.12, 67555.328),
    (17.0, 288.79, 4562.452), (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921), (12.0, 95.39, 14577.848),
    (12.0, 287.11, 31931.756), (12.0, 320.81, 34777.259),
    (9.0, 227.73, 1222.114), (8.0, 15.45, 16859.074),
];

fn season_index(season: Season) -> usize {
    match season {
        Season::SpringEquinox => 0,
        Season::SummerSolstice => 1,
        Season::FallEquinox => 2,
        Season::WinterSolstice => 3,
    }
}

/// Julian Ephemeris Day of `season` in `year`.
pub fn season_jde(year: i32, season: Season) -> f64 {
    let (coeffs, y) = if year >= 1000 {
        (&MEAN_MODERN, (year as f64 - 2000.0) / 1000.0)
    } else {
        (&MEAN_ANCIENT, year as f64 / 1000.0)
    };
    let c = coeffs[season_index(season)];
    let jde0 = c[0] + y * (c[1] + y * (c[2] + y * (c[3] + y * c[4])));

    let t = (jde0 - J2000) / 36_525.0;
    let w = deg_to_rad(35_999.373 * t - 2.47);
    let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(a, b, rate)| a * deg_to_rad(b + rate * t).cos())
        .sum();

    jde0 + 0.00001 * s / dl
}

pub fn season_instant(year: i32, season: Season) -> Result<Instant, CalendarError> {
    instant_from_jde(season_jde(year, season))
}

/// First of `candidates` strictly after `after`, searching the year of
/// `after` and the year following.
pub fn next_season(candidates: &[Season], after: Instant) -> Result<Instant, CalendarError> {
    let year = after.year();
    let mut best: Option<Instant> = None;
    for y in year..=year + 1 {
        for &season in candidates {
            let t = season_instant(y, season)?;
            if t > after && best.map_or(true, |b| t < b) {
                best = Some(t);
            }
        }
    }
    best.ok_or_else(|| CalendarError::provider(format!("no season found after {after}")))
}
