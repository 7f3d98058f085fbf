use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::CalendarError;

/// Absolute point in time. All ordering of phase events is done on this.
pub type Instant = DateTime<Utc>;

/// The four phases an ephemeris reports directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl PrimaryPhase {
    /// Cyclic order New → FirstQuarter → Full → LastQuarter.
    pub const ALL: [PrimaryPhase; 4] = [
        PrimaryPhase::New,
        PrimaryPhase::FirstQuarter,
        PrimaryPhase::Full,
        PrimaryPhase::LastQuarter,
    ];

    pub fn label(self) -> &'static str {
        LunarPhaseKind::from(self).label()
    }

    /// Position in the lunation, in quarters of a synodic month.
    pub fn quarter(self) -> u8 {
        match self {
            PrimaryPhase::New => 0,
            PrimaryPhase::FirstQuarter => 1,
            PrimaryPhase::Full => 2,
            PrimaryPhase::LastQuarter => 3,
        }
    }

    /// Parses a label produced by [`PrimaryPhase::label`].
    pub fn from_label(label: &str) -> Result<Self, CalendarError> {
        PrimaryPhase::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| CalendarError::UnrecognizedPhaseLabel {
                label: label.to_string(),
            })
    }

    /// The synthesized phase that sits between this phase and the next one.
    pub fn following_intermediate(self) -> LunarPhaseKind {
        match self {
            PrimaryPhase::New => LunarPhaseKind::WaxingCrescent,
            PrimaryPhase::FirstQuarter => LunarPhaseKind::WaxingGibbous,
            PrimaryPhase::Full => LunarPhaseKind::WaningGibbous,
            PrimaryPhase::LastQuarter => LunarPhaseKind::WaningCrescent,
        }
    }
}

/// Every phase that can appear in the calendar, primary and synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhaseKind {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhaseKind {
    pub fn label(self) -> &'static str {
        match self {
            LunarPhaseKind::New => "New Moon",
            LunarPhaseKind::WaxingCrescent => "Waxing Crescent",
            LunarPhaseKind::FirstQuarter => "First Quarter",
            LunarPhaseKind::WaxingGibbous => "Waxing Gibbous",
            LunarPhaseKind::Full => "Full Moon",
            LunarPhaseKind::WaningGibbous => "Waning Gibbous",
            LunarPhaseKind::LastQuarter => "Last Quarter",
            LunarPhaseKind::WaningCrescent => "Waning Crescent",
        }
    }

    /// Name of the PostScript procedure that draws this phase.
    pub fn command(self) -> &'static str {
        match self {
            LunarPhaseKind::New => "New",
            LunarPhaseKind::WaxingCrescent => "WaxC",
            LunarPhaseKind::FirstQuarter => "First",
            LunarPhaseKind::WaxingGibbous => "WaxG",
            LunarPhaseKind::Full => "Full",
            LunarPhaseKind::WaningGibbous => "WanG",
            LunarPhaseKind::LastQuarter => "Last",
            LunarPhaseKind::WaningCrescent => "WanC",
        }
    }
}

impl From<PrimaryPhase> for LunarPhaseKind {
    fn from(phase: PrimaryPhase) -> Self {
        match phase {
            PrimaryPhase::New => LunarPhaseKind::New,
            PrimaryPhase::FirstQuarter => LunarPhaseKind::FirstQuarter,
            PrimaryPhase::Full => LunarPhaseKind::Full,
            PrimaryPhase::LastQuarter => LunarPhaseKind::LastQuarter,
        }
    }
}

/// Synthesized kinds have no primary counterpart.
impl TryFrom<LunarPhaseKind> for PrimaryPhase {
    type Error = CalendarError;

    fn try_from(kind: LunarPhaseKind) -> Result<Self, Self::Error> {
        match kind {
            LunarPhaseKind::New => Ok(PrimaryPhase::New),
            LunarPhaseKind::FirstQuarter => Ok(PrimaryPhase::FirstQuarter),
            LunarPhaseKind::Full => Ok(PrimaryPhase::Full),
            LunarPhaseKind::LastQuarter => Ok(PrimaryPhase::LastQuarter),
            other => Err(CalendarError::UnrecognizedPhaseLabel {
                label: other.label().to_string(),
            }),
        }
    }
}

/// A primary phase as it comes out of the sampler, before its label is
/// checked against the closed set of primary phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPhase {
    pub instant: Instant,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseEvent {
    pub instant: Instant,
    pub kind: LunarPhaseKind,
    pub angle: f64,
    /// Local `HH:MM`.
    pub local_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    SpringEquinox,
    SummerSolstice,
    FallEquinox,
    WinterSolstice,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::SpringEquinox,
        Season::SummerSolstice,
        Season::FallEquinox,
        Season::WinterSolstice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Season::SpringEquinox => "Spring Equinox",
            Season::SummerSolstice => "Summer Solstice",
            Season::FallEquinox => "Fall Equinox",
            Season::WinterSolstice => "Winter Solstice",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalEvent {
    pub season: Season,
    pub instant: Instant,
    pub angle: f64,
    pub local_time: String,
    /// Local day of year the event falls on.
    pub day_of_year: u32,
}

/// Result of mapping an instant onto the year circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarAngle {
    /// Degrees since the start of the year. Instants in the padding
    /// window map below 0 or to 360 and above.
    pub angle: f64,
    /// Local `HH:MM`, after rounding to the nearest minute.
    pub time: String,
    /// Local `Mon-DD`.
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: Instant,
    pub end: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarDaySample {
    pub day_index: u32,
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub sunrise_hours: f64,
    pub sunset_hours: f64,
    pub day_length_hours: f64,
}

/// Running extrema of a solar scan. `None` means no day beat the seed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolarExtremes {
    pub earliest_sunrise: Option<SolarDaySample>,
    pub latest_sunset: Option<SolarDaySample>,
    pub longest_day: Option<SolarDaySample>,
}

/// Seed values a day has to beat to be reported as an extreme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremalThresholds {
    pub earliest_sunrise_hours: f64,
    pub latest_sunset_hours: f64,
    pub min_longest_day_hours: f64,
}

impl Default for ExtremalThresholds {
    fn default() -> Self {
        Self {
            earliest_sunrise_hours: 24.0,
            latest_sunset_hours: 0.0,
            min_longest_day_hours: 8.0,
        }
    }
}

/// Where the sun is observed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Metres above sea level.
    pub elevation: f64,
    /// Hectopascal. Zero disables refraction.
    pub pressure: f64,
    /// Degrees the visible horizon sits below the geometric one.
    pub horizon_dip: f64,
}

impl Observer {
    /// Observer at standard pressure for its elevation and no horizon dip.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            pressure: standard_pressure(elevation),
            horizon_dip: 0.0,
        }
    }
}

/// Barometric pressure at `elevation` metres, scaled from 1010 hPa at sea level.
pub fn standard_pressure(elevation: f64) -> f64 {
    1010.0 * (1.0 - 2.25577e-5 * elevation).powf(5.25588)
}
