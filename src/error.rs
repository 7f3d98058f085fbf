//! Error type for calendar generation.

use chrono::NaiveDate;

/// Error type for all fallible operations in the pom_calendar crate.
///
/// None of these are recoverable mid-computation.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A primary phase label outside the four recognized phases.
    #[error("unrecognized lunar phase label {label:?}")]
    UnrecognizedPhaseLabel {
        /// The offending label.
        label: String,
    },

    /// The sun does not cross the horizon on this date.
    #[error("no sun{kind} on {date} at this location")]
    NoRiseSet {
        /// Local date of the failed query.
        date: NaiveDate,
        /// `"rise"` or `"set"`.
        kind: &'static str,
    },

    /// The ephemeris could not resolve a requested event.
    #[error("ephemeris failure: {what}")]
    Provider {
        /// Description of the failed query.
        what: String,
    },

    /// Year outside the range the ephemeris series cover.
    #[error("year {year} is outside the supported range 1000..=2999")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// Named location not in the built-in city table.
    #[error("unknown city {name:?}")]
    UnknownCity {
        /// The name that was looked up.
        name: String,
    },

    /// Timezone name not in the IANA database.
    #[error("unknown timezone {name:?}")]
    UnknownTimezone {
        /// The rejected name.
        name: String,
    },

    /// Observer coordinates or atmosphere out of range, or missing.
    #[error("invalid observer: {reason}")]
    InvalidObserver {
        /// What was wrong.
        reason: String,
    },

    /// A local wall-clock time that does not exist in the configured zone.
    #[error("{date} {time} does not exist in timezone {tz}")]
    MissingLocalTime {
        /// Local date.
        date: NaiveDate,
        /// Local time of day, `HH:MM`.
        time: &'static str,
        /// Timezone name.
        tz: String,
    },

    /// Writing a record stream failed.
    #[error("failed to write calendar output")]
    Io(#[from] std::io::Error),
}

impl CalendarError {
    pub(crate) fn provider(what: impl Into<String>) -> Self {
        CalendarError::Provider { what: what.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unrecognized_phase_label() {
        let e = CalendarError::UnrecognizedPhaseLabel {
            label: "Quarter".to_string(),
        };
        assert_eq!(e.to_string(), "unrecognized lunar phase label \"Quarter\"");
    }

    #[test]
    fn error_no_rise_set() {
        let e = CalendarError::NoRiseSet {
            date: NaiveDate::from_ymd_opt(2023, 6, 21).unwrap(),
            kind: "set",
        };
        assert_eq!(e.to_string(), "no sunset on 2023-06-21 at this location");
    }

    #[test]
    fn error_invalid_year() {
        let e = CalendarError::InvalidYear { year: 4000 };
        assert_eq!(
            e.to_string(),
            "year 4000 is outside the supported range 1000..=2999"
        );
    }

    #[test]
    fn error_unknown_city() {
        let e = CalendarError::UnknownCity {
            name: "Atlantis".to_string(),
        };
        assert_eq!(e.to_string(), "unknown city \"Atlantis\"");
    }

    #[test]
    fn error_provider_helper() {
        let e = CalendarError::provider("instant out of range");
        assert_eq!(e.to_string(), "ephemeris failure: instant out of range");
    }

    #[test]
    fn error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let e: CalendarError = io.into();
        assert!(matches!(e, CalendarError::Io(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
