//! The lunar phase calendar: primary phases sampled from the ephemeris over
//! a padded window, placed on the year circle, with one synthesized
//! crescent or gibbous phase bisecting each consecutive pair.

use tracing::{debug, info};

use crate::angles::{utc_midnight, YearFrame};
use crate::ephemeris::Ephemeris;
use crate::error::CalendarError;
use crate::types::{Instant, PhaseEvent, PrimaryPhase, RawPhase, YearWindow};

/// Sampling window for `year`: December 1 of the year before through
/// January 12 of the year after. Wide enough to hold one primary phase on
/// each side of the year in any timezone.
pub fn year_window(year: i32) -> Result<YearWindow, CalendarError> {
    Ok(YearWindow {
        start: utc_midnight(year - 1, 12, 1)?,
        end: utc_midnight(year + 1, 1, 12)?,
    })
}

/// Walks the window once per primary phase, in cyclic order, yielding each
/// occurrence before `window.end`. Stops for good after the first error.
pub struct PhaseSampler<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    window: YearWindow,
    index: usize,
    cursor: Instant,
    done: bool,
}

impl<'a, E: Ephemeris + ?Sized> PhaseSampler<'a, E> {
    pub fn new(ephemeris: &'a E, window: YearWindow) -> Self {
        Self {
            ephemeris,
            window,
            index: 0,
            cursor: window.start,
            done: false,
        }
    }

    fn current(&self) -> Option<PrimaryPhase> {
        if self.done {
            None
        } else {
            PrimaryPhase::ALL.get(self.index).copied()
        }
    }

    fn advance_phase(&mut self) {
        self.index += 1;
        self.cursor = self.window.start;
    }
}

impl<E: Ephemeris + ?Sized> Iterator for PhaseSampler<'_, E> {
    type Item = Result<RawPhase, CalendarError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let phase = self.current()?;
            match self.ephemeris.next_phase(phase, self.cursor) {
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Ok(t) if t <= self.cursor => {
                    self.done = true;
                    return Some(Err(CalendarError::provider(format!(
                        "{} at {t} does not advance past {}",
                        phase.label(),
                        self.cursor
                    ))));
                }
                Ok(t) if t < self.window.end => {
                    self.cursor = t;
                    return Some(Ok(RawPhase {
                        instant: t,
                        label: phase.label().to_string(),
                    }));
                }
                Ok(_) => self.advance_phase(),
            }
        }
    }
}

/// All primary phases in the window, ascending by instant. The sort is
/// stable, so simultaneous phases keep their cyclic order.
pub fn sample_primary_phases<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    window: YearWindow,
) -> Result<Vec<RawPhase>, CalendarError> {
    let mut raw = PhaseSampler::new(ephemeris, window).collect::<Result<Vec<_>, _>>()?;
    raw.sort_by_key(|p| p.instant);
    Ok(raw)
}

/// Checks each label and places the phase on the year circle.
pub fn map_raw_phases(
    raw: &[RawPhase],
    frame: &YearFrame,
) -> Result<Vec<PhaseEvent>, CalendarError> {
    raw.iter()
        .map(|r| {
            let phase = PrimaryPhase::from_label(&r.label)?;
            let mapped = frame.map(r.instant);
            Ok(PhaseEvent {
                instant: r.instant,
                kind: phase.into(),
                angle: mapped.angle,
                local_time: mapped.time,
            })
        })
        .collect()
}

/// Angle halfway from `prev` to `curr` going forward. A decrease means the
/// pair straddles the 0°/360° seam; the forward distance is then taken
/// across it and the midpoint wrapped back onto the circle.
pub fn bisect_angle(prev: f64, curr: f64) -> f64 {
    let diff = curr - prev;
    if diff < 0.0 {
        let mid = prev + (diff + 360.0) / 2.0;
        if mid >= 360.0 {
            mid - 360.0
        } else {
            mid
        }
    } else {
        prev + diff / 2.0
    }
}

/// Open interval (0°, 360°): the part of the circle that is this year.
pub fn inside_year(angle: f64) -> bool {
    angle > 0.0 && angle < 360.0
}

/// Interleaves a synthesized phase after every primary phase but the last,
/// keeping only events inside the year. The last primary phase only serves
/// as the closing anchor.
pub fn interpolate_phases(
    primaries: &[PhaseEvent],
    frame: &YearFrame,
) -> Result<Vec<PhaseEvent>, CalendarError> {
    let mut out = Vec::with_capacity(primaries.len() * 2);
    for pair in primaries.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let phase = PrimaryPhase::try_from(prev.kind)?;

        let angle = bisect_angle(prev.angle, curr.angle);
        let instant = prev.instant + (curr.instant - prev.instant) / 2;

        if inside_year(prev.angle) {
            out.push(prev.clone());
        }
        if inside_year(angle) {
            out.push(PhaseEvent {
                instant,
                kind: phase.following_intermediate(),
                angle,
                local_time: frame.map(instant).time,
            });
        }
    }
    Ok(out)
}

/// Primary and synthesized phases of `frame.year`, in order around the year.
pub fn phase_calendar<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    frame: &YearFrame,
) -> Result<Vec<PhaseEvent>, CalendarError> {
    let window = year_window(frame.year)?;
    let raw = sample_primary_phases(ephemeris, window)?;
    info!(year = frame.year, primaries = raw.len(), "sampled primary phases");

    let primaries = map_raw_phases(&raw, frame)?;
    let events = interpolate_phases(&primaries, frame)?;
    debug!(events = events.len(), "interpolated intermediate phases");
    Ok(events)
}
