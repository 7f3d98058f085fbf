use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use pom_calendar::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Calendar arithmetic ──

#[test]
fn test_leap_year_rules() {
    assert!(leap_year(2024));
    assert!(leap_year(2000));
    assert!(!leap_year(1900));
    assert!(!leap_year(2023));
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(2023), 365);
}

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (360.0, 0.0),
        (-1.0, 359.0),
        (725.0, 5.0),
        (-370.0, 350.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_deg_rad_round_trip() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
    assert_approx!(rad_to_deg(deg_to_rad(123.456)), 123.456, 1e-9);
}

#[test]
fn test_decimal_hours() {
    let t = Utc.with_ymd_and_hms(2023, 6, 21, 5, 30, 36).unwrap();
    assert_approx!(decimal_hours(&t), 5.51, 1e-9);
}

// ── Rounding ──

#[test]
fn test_round_to_minute_half_up() {
    let down = Utc.with_ymd_and_hms(2023, 3, 20, 21, 24, 29).unwrap();
    let up = Utc.with_ymd_and_hms(2023, 3, 20, 21, 24, 30).unwrap();
    assert_eq!(round_to_minute(down), Utc.with_ymd_and_hms(2023, 3, 20, 21, 24, 0).unwrap());
    assert_eq!(round_to_minute(up), Utc.with_ymd_and_hms(2023, 3, 20, 21, 25, 0).unwrap());
}

#[test]
fn test_round_to_minute_crosses_midnight() {
    let t = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 45).unwrap();
    assert_eq!(round_to_minute(t), Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
}

// ── Midnights ──

#[test]
fn test_utc_midnight_rejects_bad_date() {
    assert!(utc_midnight(2023, 2, 30).is_err());
    assert_eq!(
        utc_midnight(2023, 12, 1).unwrap(),
        Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_local_midnight_skips_dst_gap() {
    // São Paulo clocks jumped from 00:00 to 01:00 on 2018-11-04.
    let date = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
    let start = local_midnight(Tz::America__Sao_Paulo, date).unwrap();
    assert_eq!(start.hour(), 1);
    assert_eq!(start.date_naive(), date);
}

// ── YearFrame ──

#[test]
fn test_epoch_is_local_midnight() {
    let frame = YearFrame::new(2023, Tz::America__Los_Angeles).unwrap();
    assert_eq!(frame.epoch, Utc.with_ymd_and_hms(2023, 1, 1, 8, 0, 0).unwrap());
    assert_eq!(frame.days_in_year, 365);
    assert_approx!(frame.angle_at(frame.epoch), 0.0, 1e-12);
}

#[test]
fn test_one_day_is_one_share_of_circle() {
    let frame = YearFrame::new(2024, Tz::UTC).unwrap();
    let day2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    assert_approx!(frame.angle_at(day2), 360.0 / 366.0, 1e-12);
}

#[test]
fn test_padding_instants_fall_outside_year() {
    let frame = YearFrame::new(2023, Tz::UTC).unwrap();
    let before = Utc.with_ymd_and_hms(2022, 12, 25, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    assert!(frame.angle_at(before) < 0.0);
    assert!(frame.angle_at(after) > 360.0);
}

#[test]
fn test_seattle_spring_equinox_angle() {
    let frame = YearFrame::new(2023, Tz::America__Los_Angeles).unwrap();
    let equinox = Utc.with_ymd_and_hms(2023, 3, 20, 21, 24, 25).unwrap();
    let mapped = frame.map(equinox);
    assert!(mapped.angle > 77.0 && mapped.angle < 80.0, "angle={}", mapped.angle);
    assert_approx!(mapped.angle, 77.48, 0.005);
    assert_eq!(mapped.time, "14:24");
    assert_eq!(mapped.date, "Mar-20");
    assert_eq!(frame.day_of_year(equinox), 79);
}

#[test]
fn test_map_is_stable_within_a_minute() {
    let frame = YearFrame::new(2023, Tz::Europe__Paris).unwrap();
    let a = Utc.with_ymd_and_hms(2023, 7, 4, 10, 15, 31).unwrap();
    let b = Utc.with_ymd_and_hms(2023, 7, 4, 10, 16, 29).unwrap();
    assert_eq!(frame.map(a), frame.map(b));
}

#[test]
fn test_date_of_day_index() {
    let frame = YearFrame::new(2024, Tz::UTC).unwrap();
    assert_eq!(frame.date_of(60), NaiveDate::from_ymd_opt(2024, 2, 29));
    assert_eq!(frame.date_of(366), NaiveDate::from_ymd_opt(2024, 12, 31));
    assert_eq!(frame.date_of(367), None);
}
