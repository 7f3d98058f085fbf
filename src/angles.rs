use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::CalendarError;
use crate::types::{CalendarAngle, Instant};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Hours since local midnight as a fraction, e.g. 05:30:36 → 5.51.
pub fn decimal_hours<T: Timelike>(t: &T) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0
}

/// Nearest whole minute: add 30 seconds, then drop the seconds.
pub fn round_to_minute(instant: Instant) -> Instant {
    let secs = instant.timestamp() + 30;
    DateTime::from_timestamp(secs - secs.rem_euclid(60), 0).unwrap_or(instant)
}

/// 00:00 UTC on the given date.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> Result<Instant, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .ok_or(CalendarError::InvalidYear { year })
}

/// First instant of `date` in `tz`. Falls back to 01:00 when midnight
/// falls in a DST gap.
pub fn local_midnight(tz: Tz, date: NaiveDate) -> Result<DateTime<Tz>, CalendarError> {
    let at = |h: u32| {
        NaiveTime::from_hms_opt(h, 0, 0)
            .and_then(|t| tz.from_local_datetime(&date.and_time(t)).earliest())
    };
    at(0).or_else(|| at(1)).ok_or_else(|| CalendarError::MissingLocalTime {
        date,
        time: "00:00",
        tz: tz.name().to_string(),
    })
}

/// A target year in a timezone: the frame every event angle is measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearFrame {
    pub year: i32,
    pub tz: Tz,
    /// 00:00 local on January 1.
    pub epoch: Instant,
    pub days_in_year: u32,
}

impl YearFrame {
    pub fn new(year: i32, tz: Tz) -> Result<Self, CalendarError> {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or(CalendarError::InvalidYear { year })?;
        let epoch = local_midnight(tz, jan1)?.with_timezone(&Utc);
        Ok(Self {
            year,
            tz,
            epoch,
            days_in_year: days_in_year(year),
        })
    }

    /// Degrees travelled through the year at `instant`, after rounding to
    /// the nearest minute. Not wrapped: padding-window instants fall
    /// outside `[0, 360)`.
    pub fn angle_at(&self, instant: Instant) -> f64 {
        let elapsed = (round_to_minute(instant) - self.epoch).num_seconds() as f64;
        elapsed / SECONDS_PER_DAY / self.days_in_year as f64 * 360.0
    }

    /// Maps an instant to its calendar angle plus local time and date.
    pub fn map(&self, instant: Instant) -> CalendarAngle {
        let local = round_to_minute(instant).with_timezone(&self.tz);
        CalendarAngle {
            angle: self.angle_at(instant),
            time: local.format("%H:%M").to_string(),
            date: local.format("%b-%d").to_string(),
        }
    }

    pub fn local(&self, instant: Instant) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    /// Local day of year (1-based) of `instant`.
    pub fn day_of_year(&self, instant: Instant) -> u32 {
        self.local(instant).ordinal()
    }

    /// Local date of the 1-based `day_index` in this year.
    pub fn date_of(&self, day_index: u32) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.year, day_index)
    }
}
