//! Daily sunrise and sunset over a year, and their extremes.

use chrono::Utc;
use tracing::debug;

use crate::angles::{decimal_hours, local_midnight, YearFrame};
use crate::ephemeris::Ephemeris;
use crate::error::CalendarError;
use crate::types::{ExtremalThresholds, Observer, SolarDaySample, SolarExtremes};

/// One sample per local day of the year, queried from local midnight.
/// Stops for good after the first error.
pub struct SolarDays<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    observer: Observer,
    frame: YearFrame,
    day_index: u32,
    failed: bool,
}

impl<'a, E: Ephemeris + ?Sized> SolarDays<'a, E> {
    pub fn new(ephemeris: &'a E, observer: Observer, frame: YearFrame) -> Self {
        Self {
            ephemeris,
            observer,
            frame,
            day_index: 1,
            failed: false,
        }
    }

    fn sample(&self, day_index: u32) -> Result<SolarDaySample, CalendarError> {
        let date = self
            .frame
            .date_of(day_index)
            .ok_or(CalendarError::InvalidYear { year: self.frame.year })?;
        let start = local_midnight(self.frame.tz, date)?.with_timezone(&Utc);

        let rise = self.ephemeris.next_rising(&self.observer, start)?;
        let set = self.ephemeris.next_setting(&self.observer, rise)?;

        let sunrise = self.frame.local(rise);
        let sunset = self.frame.local(set);
        Ok(SolarDaySample {
            day_index,
            sunrise_hours: decimal_hours(&sunrise),
            sunset_hours: decimal_hours(&sunset),
            day_length_hours: (set - rise).num_seconds() as f64 / 3600.0,
            sunrise,
            sunset,
        })
    }
}

impl<E: Ephemeris + ?Sized> Iterator for SolarDays<'_, E> {
    type Item = Result<SolarDaySample, CalendarError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.day_index > self.frame.days_in_year {
            return None;
        }
        let result = self.sample(self.day_index);
        self.failed = result.is_err();
        self.day_index += 1;
        Some(result)
    }
}

/// Running earliest sunrise, latest sunset and longest day. A day has to
/// strictly beat the current value (initially the threshold seed).
#[derive(Debug, Clone)]
pub struct ExtremalTracker {
    earliest: f64,
    latest: f64,
    longest: f64,
    extremes: SolarExtremes,
}

impl ExtremalTracker {
    pub fn new(thresholds: ExtremalThresholds) -> Self {
        Self {
            earliest: thresholds.earliest_sunrise_hours,
            latest: thresholds.latest_sunset_hours,
            longest: thresholds.min_longest_day_hours,
            extremes: SolarExtremes::default(),
        }
    }

    pub fn observe(&mut self, sample: &SolarDaySample) {
        if sample.sunrise_hours < self.earliest {
            self.earliest = sample.sunrise_hours;
            self.extremes.earliest_sunrise = Some(sample.clone());
            debug!(day = sample.day_index, hours = sample.sunrise_hours, "earliest sunrise");
        }
        if sample.sunset_hours > self.latest {
            self.latest = sample.sunset_hours;
            self.extremes.latest_sunset = Some(sample.clone());
            debug!(day = sample.day_index, hours = sample.sunset_hours, "latest sunset");
        }
        if sample.day_length_hours > self.longest {
            self.longest = sample.day_length_hours;
            self.extremes.longest_day = Some(sample.clone());
            debug!(day = sample.day_index, hours = sample.day_length_hours, "longest day");
        }
    }

    pub fn extremes(&self) -> &SolarExtremes {
        &self.extremes
    }

    pub fn finish(self) -> SolarExtremes {
        self.extremes
    }
}
