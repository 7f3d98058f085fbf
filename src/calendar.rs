//! One calendar run: seasons, then lunar phases, then the daily solar
//! records, then the trailer.

use std::io::Write;

use tracing::info;

use crate::angles::YearFrame;
use crate::config::CalendarConfig;
use crate::ephemeris::Ephemeris;
use crate::error::CalendarError;
use crate::format::{extremes_report, phase_record, seasonal_record, solar_record, TRAILER};
use crate::phases::phase_calendar;
use crate::seasonal::{season_days, seasonal_events};
use crate::solar_days::{ExtremalTracker, SolarDays};
use crate::types::{PhaseEvent, SeasonalEvent, SolarExtremes};

/// What a run produced, besides the lines it wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarReport {
    pub seasons: Vec<SeasonalEvent>,
    pub phases: Vec<PhaseEvent>,
    /// `None` when the solar section was skipped.
    pub extremes: Option<SolarExtremes>,
}

/// Writes the calendar records to `out` and the solar extremes to `diag`.
///
/// Seasons and phases are fully computed before the first line is written,
/// so a bad phase label or ephemeris failure there leaves `out` untouched.
pub fn write_calendar<E, W, D>(
    ephemeris: &E,
    config: &CalendarConfig,
    out: &mut W,
    diag: &mut D,
) -> Result<CalendarReport, CalendarError>
where
    E: Ephemeris + ?Sized,
    W: Write,
    D: Write,
{
    let frame = YearFrame::new(config.year, config.tz)?;
    info!(
        year = config.year,
        location = %config.location_name,
        tz = config.tz.name(),
        "generating calendar"
    );

    let seasons = seasonal_events(ephemeris, &frame)?;
    let phases = phase_calendar(ephemeris, &frame)?;

    for event in &seasons {
        writeln!(out, "{}", seasonal_record(event))?;
    }
    for event in &phases {
        writeln!(out, "{}", phase_record(event))?;
    }

    let extremes = if config.include_solar {
        let days = season_days(&seasons);
        let mut tracker = ExtremalTracker::new(config.thresholds);
        for sample in SolarDays::new(ephemeris, config.observer, frame) {
            let sample = sample?;
            tracker.observe(&sample);
            writeln!(out, "{}", solar_record(&sample, days.contains(&sample.day_index)))?;
        }
        let extremes = tracker.finish();
        for line in extremes_report(&extremes) {
            writeln!(diag, "{line}")?;
        }
        Some(extremes)
    } else {
        None
    };

    write!(out, "{TRAILER}")?;
    out.flush()?;
    info!(
        seasons = seasons.len(),
        phases = phases.len(),
        "calendar written"
    );

    Ok(CalendarReport {
        seasons,
        phases,
        extremes,
    })
}
