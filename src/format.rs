//! Record lines for the print-layout generator, and the diagnostics trailer.
//!
//! The layout generator splits each record on `%%`: everything before is
//! PostScript operands and operator, everything after a comment carrying
//! the raw UTC instant. Keep these formats stable.

use crate::types::{Instant, PhaseEvent, SeasonalEvent, SolarDaySample, SolarExtremes};

pub const TRAILER: &str = "showpage\n\n%%EOF\n\n";

/// UTC instant as `2023/3/20 21:24:25`.
pub fn raw_timestamp(instant: Instant) -> String {
    instant.format("%Y/%-m/%-d %H:%M:%S").to_string()
}

/// `77.48 (Spring Equinox 14:24) event %% 2023/3/20 21:24:25Z`
pub fn seasonal_record(event: &SeasonalEvent) -> String {
    format!(
        "{:6.2} ({} {}) event %% {}Z",
        event.angle,
        event.season.label(),
        event.local_time,
        raw_timestamp(event.instant)
    )
}

/// `5.97 (Full Moon 15:08) (Full) pom %% 2023/1/6 23:07:47Z`
pub fn phase_record(event: &PhaseEvent) -> String {
    format!(
        "{:6.2} ({} {}) ({}) pom %% {}Z",
        event.angle,
        event.kind.label(),
        event.local_time,
        event.kind.command(),
        raw_timestamp(event.instant)
    )
}

/// `172 5.1869 21.1847 SolEqn %% Sun Rise/Set: Jun-21 05:11:13 21:11:05 PDT`
pub fn solar_record(sample: &SolarDaySample, season_day: bool) -> String {
    format!(
        "{} {:6.4} {:7.4} {} %% Sun Rise/Set: {} {} {}",
        sample.day_index,
        sample.sunrise_hours,
        sample.sunset_hours,
        if season_day { "SolEqn" } else { "Sol" },
        sample.sunrise.format("%b-%d %H:%M:%S"),
        sample.sunset.format("%H:%M:%S"),
        sample.sunset.format("%Z"),
    )
}

fn describe(sample: Option<&SolarDaySample>, f: impl Fn(&SolarDaySample) -> String) -> String {
    sample.map_or_else(|| "none beat threshold".to_string(), f)
}

/// Three diagnostics lines summarising a solar scan.
pub fn extremes_report(extremes: &SolarExtremes) -> Vec<String> {
    vec![
        format!(
            "earliest sunrise: {}",
            describe(extremes.earliest_sunrise.as_ref(), |s| format!(
                "day {} {}",
                s.day_index,
                s.sunrise.format("%b-%d %H:%M:%S")
            ))
        ),
        format!(
            "longest day: {}",
            describe(extremes.longest_day.as_ref(), |s| format!(
                "day {} {:.4}h rise {} set {}",
                s.day_index,
                s.day_length_hours,
                s.sunrise.format("%H:%M:%S"),
                s.sunset.format("%H:%M:%S")
            ))
        ),
        format!(
            "latest sunset: {}",
            describe(extremes.latest_sunset.as_ref(), |s| format!(
                "day {} {}",
                s.day_index,
                s.sunset.format("%b-%d %H:%M:%S")
            ))
        ),
    ]
}
