//! The ephemeris seam: everything astronomical the calendar asks for.
//!
//! Calendar code only talks to [`Ephemeris`]. [`AlmanacEphemeris`] is the
//! built-in implementation backed by the series in [`crate::moon`],
//! [`crate::seasons`] and [`crate::sun`]; tests substitute scripted ones.

use crate::error::CalendarError;
use crate::types::{Instant, Observer, PrimaryPhase, Season};
use crate::{moon, seasons, sun};

/// Event queries. Every `next_*` returns the first occurrence strictly
/// after its argument, so repeated calls walk forward through time.
pub trait Ephemeris {
    fn next_phase(&self, phase: PrimaryPhase, after: Instant) -> Result<Instant, CalendarError>;

    fn next_equinox(&self, after: Instant) -> Result<Instant, CalendarError>;

    fn next_solstice(&self, after: Instant) -> Result<Instant, CalendarError>;

    fn next_rising(&self, observer: &Observer, after: Instant) -> Result<Instant, CalendarError>;

    fn next_setting(&self, observer: &Observer, after: Instant) -> Result<Instant, CalendarError>;
}

/// Analytic series, good to about a minute for years 1000–2999.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlmanacEphemeris;

impl Ephemeris for AlmanacEphemeris {
    fn next_phase(&self, phase: PrimaryPhase, after: Instant) -> Result<Instant, CalendarError> {
        moon::next_phase(phase, after)
    }

    fn next_equinox(&self, after: Instant) -> Result<Instant, CalendarError> {
        seasons::next_season(&[Season::SpringEquinox, Season::FallEquinox], after)
    }

    fn next_solstice(&self, after: Instant) -> Result<Instant, CalendarError> {
        seasons::next_season(&[Season::SummerSolstice, Season::WinterSolstice], after)
    }

    fn next_rising(&self, observer: &Observer, after: Instant) -> Result<Instant, CalendarError> {
        sun::next_crossing(observer, after, true)
    }

    fn next_setting(&self, observer: &Observer, after: Instant) -> Result<Instant, CalendarError> {
        sun::next_crossing(observer, after, false)
    }
}
