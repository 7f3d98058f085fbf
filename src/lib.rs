pub mod angles;
pub mod calendar;
pub mod cities;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod format;
pub mod julian;
pub mod moon;
pub mod phases;
pub mod seasonal;
pub mod seasons;
pub mod solar_days;
pub mod sun;
pub mod types;

pub use angles::{
    days_in_year, decimal_hours, deg_to_rad, leap_year, local_midnight, normalize_angle,
    rad_to_deg, round_to_minute, utc_midnight, YearFrame,
};

pub use calendar::{write_calendar, CalendarReport};
pub use cities::{lookup_city, City, CITIES};
pub use config::{CalendarConfig, ConfigFile, LocationToml, ThresholdsToml};
pub use ephemeris::{AlmanacEphemeris, Ephemeris};
pub use error::CalendarError;

pub use phases::{
    bisect_angle, inside_year, interpolate_phases, map_raw_phases, phase_calendar,
    sample_primary_phases, year_window, PhaseSampler,
};
pub use seasonal::{season_days, seasonal_events};
pub use solar_days::{ExtremalTracker, SolarDays};

pub use types::{
    CalendarAngle, ExtremalThresholds, Instant, LunarPhaseKind, Observer, PhaseEvent,
    PrimaryPhase, RawPhase, Season, SeasonalEvent, SolarDaySample, SolarExtremes, YearWindow,
};
