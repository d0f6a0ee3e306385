// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible constructor of the crate.

/// Construction failure for [`DateComponents`](crate::DateComponents),
/// [`TimeComponents`](crate::TimeComponents) and
/// [`DateTimeComponents`](crate::DateTimeComponents).
///
/// Errors are only ever produced at construction time: once a value exists,
/// every derived quantity (J2000 day, ISO week, seconds in day, …) is total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentsError {
    /// The `(year, month, day)` triple does not name a day of the hybrid
    /// Julian/Gregorian calendar (month or day out of range, February 29 of
    /// a common year, one of the ten days dropped in October 1582, or a day
    /// beyond the representable range).
    #[error("non-existent date {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u8,
        /// Requested day of month.
        day: u8,
    },

    /// The day number is outside `1..=365` (or `1..=366` on leap years).
    #[error("non-existent day number {day_number} in year {year}")]
    InvalidDayNumber {
        /// Requested year.
        year: i32,
        /// Requested day number within the year.
        day_number: u16,
    },

    /// The week components do not name a day of the ISO-8601 week calendar
    /// (week 53 in a 52-week year, day of week outside `1..=7`, …).
    #[error("non-existent week date {year}-W{week:02}-{day_of_week}")]
    InvalidWeekDate {
        /// Week-numbering year.
        year: i32,
        /// Requested week.
        week: u8,
        /// Requested day of week (1 = Monday).
        day_of_week: u8,
    },

    /// Clock fields outside `00:00:00 ..= 23:59:61` (exclusive).
    #[error("non-existent time {hour:02}:{minute:02}:{second}")]
    InvalidTime {
        /// Requested hour.
        hour: u8,
        /// Requested minute.
        minute: u8,
        /// Requested second of minute.
        second: f64,
    },

    /// Epoch + offset arithmetic left the signed 32-bit day range.
    #[error("day offset {j2000_day} from J2000 is outside the supported range")]
    DayOffsetOverflow {
        /// The offending day offset with respect to J2000.
        j2000_day: i64,
    },

    /// A seconds number (or leap magnitude / minute duration) violates the
    /// bounds of the leap-second aware time constructor.
    #[error("out of range seconds number {value} (must be in [{min}, {max}])")]
    OutOfRangeSeconds {
        /// The offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message_is_iso_like() {
        let err = ComponentsError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "non-existent date 2023-02-29");
    }

    #[test]
    fn test_invalid_week_date_message() {
        let err = ComponentsError::InvalidWeekDate {
            year: 2021,
            week: 53,
            day_of_week: 1,
        };
        assert_eq!(err.to_string(), "non-existent week date 2021-W53-1");
    }

    #[test]
    fn test_out_of_range_seconds_message() {
        let err = ComponentsError::OutOfRangeSeconds {
            value: 86_401.0,
            min: 0.0,
            max: 86_400.0,
        };
        assert_eq!(
            err.to_string(),
            "out of range seconds number 86401 (must be in [0, 86400])"
        );
    }

    #[test]
    fn test_error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ComponentsError>();
    }
}
