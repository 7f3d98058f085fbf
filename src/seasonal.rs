//! The year's equinoxes and solstices, placed on the year circle.

use std::collections::BTreeSet;

use tracing::debug;

use crate::angles::{utc_midnight, YearFrame};
use crate::ephemeris::Ephemeris;
use crate::error::CalendarError;
use crate::types::{Season, SeasonalEvent};

/// Spring equinox, summer solstice, fall equinox, winter solstice of
/// `frame.year`, in that order.
pub fn seasonal_events<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    frame: &YearFrame,
) -> Result<Vec<SeasonalEvent>, CalendarError> {
    let year = frame.year;
    let queries = [
        (Season::SpringEquinox, ephemeris.next_equinox(frame.epoch)?),
        (Season::SummerSolstice, ephemeris.next_solstice(frame.epoch)?),
        (Season::FallEquinox, ephemeris.next_equinox(utc_midnight(year, 6, 1)?)?),
        (Season::WinterSolstice, ephemeris.next_solstice(utc_midnight(year, 9, 1)?)?),
    ];

    Ok(queries
        .into_iter()
        .map(|(season, instant)| {
            let mapped = frame.map(instant);
            let day_of_year = frame.day_of_year(instant);
            debug!(season = season.label(), %instant, angle = mapped.angle, "seasonal event");
            SeasonalEvent {
                season,
                instant,
                angle: mapped.angle,
                local_time: mapped.time,
                day_of_year,
            }
        })
        .collect())
}

/// Local days of year that carry an equinox or solstice.
pub fn season_days(events: &[SeasonalEvent]) -> BTreeSet<u32> {
    events.iter().map(|e| e.day_of_year).collect()
}
