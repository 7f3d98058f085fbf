//! Instants of the primary lunar phases.
//!
//! Mean lunation `k` (0 = new moon of 2000-01-06) plus the periodic terms in
//! the Sun's and Moon's anomalies, the Moon's argument of latitude and the
//! ascending node, and fourteen planetary arguments. Accurate to well under
//! a minute against full lunar theories for the supported years.

use crate::angles::deg_to_rad;
use crate::error::CalendarError;
use crate::julian::{decimal_year, instant_from_jde};
use crate::types::{Instant, PrimaryPhase};

const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// (coefficient, sin multiple of M', M, F, Ω; eccentricity power)
type Term = (f64, [i8; 4], u8);

#[rustfmt::skip]
const NEW_MOON_TERMS: [Term; 25] = [
    (-0.40720, [1, 0, 0, 0], 0), ( 0.17241, [0, 1, 0, 0], 1),
    ( 0.01608, [2, 0, 0, 0], 0), ( 0.01039, [0, 0, 2, 0], 0),
    ( 0.00739, [1, -1, 0, 0], 1), (-0.00514, [1, 1, 0, 0], 1),
    ( 0.00208, [0, 2, 0, 0], 2), (-0.00111, [1, 0, -2, 0], 0),
    (-0.00057, [1, 0, 2, 0], 0), ( 0.00056, [2, 1, 0, 0], 1),
    (-0.00042, [3, 0, 0, 0], 0), ( 0.00042, [0, 1, 2, 0], 1),
    ( 0.00038, [0, 1, -2, 0], 1), (-0.00024, [2, -1, 0, 0], 1),
    (-0.00017, [0, 0, 0, 1], 0), (-0.00007, [1, 2, 0, 0], 0),
    ( 0.00004, [2, 0, -2, 0], 0), ( 0.00004, [0, 3, 0, 0], 0),
    ( 0.00003, [1, 1, -2, 0], 0), ( 0.00003, [2, 0, 2, 0], 0),
    (-0.00003, [1, 1, 2, 0], 0), ( 0.00003, [1, -1, 2, 0], 0),
    (-0.00002, [1, -1, -2, 0], 0), (-0.00002, [3, 1, 0, 0], 0),
    ( 0.00002, [4, 0, 0, 0], 0),
];

#[rustfmt::skip]
const FULL_MOON_TERMS: [Term; 25] = [
    (-0.40614, [1, 0, 0, 0], 0), ( 0.17302, [0, 1, 0, 0], 1),
    ( 0.01614, [2, 0, 0, 0], 0), ( 0.01043, [0, 0, 2, 0], 0),
    ( 0.00734, [1, -1, 0, 0], 1), (-0.00515, [1, 1, 0, 0], 1),
    ( 0.00209, [0, 2, 0, 0], 2), (-0.00111, [1, 0, -2, 0], 0),
    (-0.00057, [1, 0, 2, 0], 0), ( 0.00056, [2, 1, 0, 0], 1),
    (-0.00042, [3, 0, 0, 0], 0), ( 0.00042, [0, 1, 2, 0], 1),
    ( 0.00038, [0, 1, -2, 0], 1), (-0.00024, [2, -1, 0, 0], 1),
    (-0.00017, [0, 0, 0, 1], 0), (-0.00007, [1, 2, 0, 0], 0),
    ( 0.00004, [2, 0, -2, 0], 0), ( 0.00004, [0, 3, 0, 0], 0),
    ( 0.00003, [1, 1, -2, 0], 0), ( 0.00003, [2, 0, 2, 0], 0),
    (-0.00003, [1, 1, 2, 0], 0), ( 0.00003, [1, -1, 2, 0], 0),
    (-0.00002, [1, -1, -2, 0], 0), (-0.00002, [3, 1, 0, 0], 0),
    ( 0.00002, [4, 0, 0, 0], 0),
];

#[rustfmt::skip]
const QUARTER_TERMS: [Term; 25] = [
    (-0.62801, [1, 0, 0, 0], 0), ( 0.17172, [0, 1, 0, 0], 1),
    (-0.01183, [1, 1, 0, 0], 1), ( 0.00862, [2, 0, 0, 0], 0),
    ( 0.00804, [0, 0, 2, 0], 0), ( 0.00454, [1, -1, 0, 0], 1),
    ( 0.00204, [0, 2, 0, 0], 2), (-0.00180, [1, 0, -2, 0], 0),
    (-0.00070, [1, 0, 2, 0], 0), (-0.00040, [3, 0, 0, 0], 0),
    (-0.00034, [2, -1, 0, 0], 1), ( 0.00032, [0, 1, 2, 0], 1),
    ( 0.00032, [0, 1, -2, 0], 1), (-0.00028, [1, 2, 0, 0], 2),
    ( 0.00027, [2, 1, 0, 0], 1), (-0.00017, [0, 0, 0, 1], 0),
    (-0.00005, [1, -1, -2, 0], 0), ( 0.00004, [2, 0, 2, 0], 0),
    (-0.00004, [1, 1, 2, 0], 0), ( 0.00004, [1, -2, 0, 0], 0),
    ( 0.00003, [1, 1, -2, 0], 0), ( 0.00003, [0, 3, 0, 0], 0),
    ( 0.00002, [2, 0, -2, 0], 0), ( 0.00002, [1, -1, 2, 0], 0),
    (-0.00002, [3, 1, 0, 0], 0),
];

/// (coefficient, phase at k = 0, rate per lunation), degrees.
#[rustfmt::skip]
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (0.000325, 299.77, 0.107408), (0.000165, 251.88, 0.016321),
    (0.000164, 251.83, 26.651886), (0.000126, 349.42, 36.412478),
    (0.000110, 84.66, 18.206239), (0.000062, 141.74, 53.303771),
    (0.000060, 207.14, 2.453732), (0.000056, 154.84, 7.306860),
    (0.000047, 34.52, 27.261239), (0.000042, 207.19, 0.121824),
    (0.000040, 291.34, 1.844379), (0.000037, 161.72, 24.198154),
    (0.000035, 239.56, 25.513099), (0.000023, 331.55, 3.592518),
];

/// Julian Ephemeris Day of the phase at lunation `k`. The fractional part
/// of `k` must match the phase: .0 new, .25 first quarter, .5 full, .75 last.
pub fn phase_jde(k: f64, phase: PrimaryPhase) -> f64 {
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = 2_451_550.09766 + 29.530588861 * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = deg_to_rad(2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3);
    let mp = deg_to_rad(
        201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4,
    );
    let f = deg_to_rad(
        160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4,
    );
    let omega = deg_to_rad(124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3);

    let terms = match phase {
        PrimaryPhase::New => &NEW_MOON_TERMS,
        PrimaryPhase::Full => &FULL_MOON_TERMS,
        PrimaryPhase::FirstQuarter | PrimaryPhase::LastQuarter => &QUARTER_TERMS,
    };
    let periodic: f64 = terms
        .iter()
        .map(|&(coeff, [a, b, c, d], e_pow)| {
            let arg = a as f64 * mp + b as f64 * m + c as f64 * f + d as f64 * omega;
            coeff * e.powi(e_pow as i32) * arg.sin()
        })
        .sum();

    let quarter_shift = {
        let w = 0.00306 - 0.00038 * e * m.cos() + 0.00026 * mp.cos() - 0.00002 * (mp - m).cos()
            + 0.00002 * (mp + m).cos()
            + 0.00002 * (2.0 * f).cos();
        match phase {
            PrimaryPhase::FirstQuarter => w,
            PrimaryPhase::LastQuarter => -w,
            PrimaryPhase::New | PrimaryPhase::Full => 0.0,
        }
    };

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &(coeff, phase0, rate))| {
            let mut arg = phase0 + rate * k;
            if i == 0 {
                arg -= 0.009173 * t2;
            }
            coeff * deg_to_rad(arg).sin()
        })
        .sum();

    mean + periodic + quarter_shift + planetary
}

fn phase_instant(k: f64, phase: PrimaryPhase) -> Result<Instant, CalendarError> {
    instant_from_jde(phase_jde(k, phase))
}

/// First occurrence of `phase` strictly after `after`.
pub fn next_phase(phase: PrimaryPhase, after: Instant) -> Result<Instant, CalendarError> {
    let offset = phase.quarter() as f64 / 4.0;
    let mut k = ((decimal_year(after) - 2000.0) * LUNATIONS_PER_YEAR).floor() + offset;

    while phase_instant(k, phase)? <= after {
        k += 1.0;
    }
    while phase_instant(k - 1.0, phase)? > after {
        k -= 1.0;
    }
    phase_instant(k, phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_zero_is_first_new_moon_of_2000() {
        // 2000-01-06 18:14 UT.
        let jde = phase_jde(0.0, PrimaryPhase::New);
        assert!((jde - 2_451_550.26).abs() < 0.01, "jde={jde}");
    }

    #[test]
    fn quarters_bracket_full_moon() {
        let k = 100.0;
        let first = phase_jde(k + 0.25, PrimaryPhase::FirstQuarter);
        let full = phase_jde(k + 0.5, PrimaryPhase::Full);
        let last = phase_jde(k + 0.75, PrimaryPhase::LastQuarter);
        assert!(first < full && full < last);
        assert!((full - first) > 6.0 && (full - first) < 9.0);
    }
}
