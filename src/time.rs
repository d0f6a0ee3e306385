// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time within the day broken up as hour, minute and second.
//!
//! [`TimeComponents`] supports leap seconds: during the last minute of a day
//! carrying a positive leap second the second of minute reaches into
//! `[60, 61)`.  The general constructor [`TimeComponents::from_seconds`]
//! takes the leap magnitude and the duration of the current minute
//! explicitly; [`TimeComponents::from_seconds_in_day`] infers them from the
//! seconds count.
//!
//! ```
//! use tempoch_civil::TimeComponents;
//!
//! let leap = TimeComponents::from_seconds(86_399, 0.5, 1.0, 61)?;
//! assert_eq!((leap.hour(), leap.minute()), (23, 59));
//! assert!((leap.second() - 60.5).abs() < 1e-12);
//! # Ok::<(), tempoch_civil::ComponentsError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use qtty::Seconds;
use tracing::{debug, trace};

use crate::error::ComponentsError;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Number of seconds in a day without leap second.
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Absolute tolerance on the second of minute used by equality.
const SECOND_TOLERANCE: f64 = 1.0e-8;

/// A time of day with its offset from UTC.
///
/// Equality compares hour, minute and UTC offset exactly and the second of
/// minute within an absolute tolerance of `1e-8`, absorbing the noise left
/// by repeated offset arithmetic.  Ordering is by seconds in the UTC day.
#[derive(Debug, Copy, Clone)]
pub struct TimeComponents {
    hour: u8,
    minute: u8,
    second: f64,
    minutes_from_utc: i32,
}

impl TimeComponents {
    /// 00:00:00 UTC.
    pub const H00: Self = Self::from_parts_unchecked(0, 0, 0.0, 0);

    /// 12:00:00 UTC.
    pub const H12: Self = Self::from_parts_unchecked(12, 0, 0.0, 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════

impl TimeComponents {
    #[inline]
    pub(crate) const fn from_parts_unchecked(
        hour: u8,
        minute: u8,
        second: f64,
        minutes_from_utc: i32,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            minutes_from_utc,
        }
    }

    /// Build a UTC time from its clock fields.
    ///
    /// Seconds in `[60, 61)` are accepted since they occur during leap
    /// seconds.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::InvalidTime`] if `hour > 23`, `minute > 59` or
    /// `second` is outside `[0, 61)`.
    #[inline]
    pub fn new(hour: u8, minute: u8, second: f64) -> Result<Self, ComponentsError> {
        Self::with_utc_offset(hour, minute, second, 0)
    }

    /// Build a local time from its clock fields and its offset from UTC,
    /// as an integral number of minutes (ISO-8601).
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_utc_offset(
        hour: u8,
        minute: u8,
        second: f64,
        minutes_from_utc: i32,
    ) -> Result<Self, ComponentsError> {
        if hour > 23 || minute > 59 || !(0.0..61.0).contains(&second) {
            debug!(hour, minute, second, "rejected non-existent time");
            return Err(ComponentsError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self::from_parts_unchecked(
            hour,
            minute,
            second,
            minutes_from_utc,
        ))
    }

    /// Build a UTC time from the number of seconds since midnight.
    ///
    /// Values from 86 400 (inclusive) to 86 401 (exclusive) are read as the
    /// leap second ending the day: `86_400.5` gives `23:59:60.5`.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::OutOfRangeSeconds`] outside `[0, 86401)`.
    #[inline]
    pub fn from_seconds_in_day(second_in_day: f64) -> Result<Self, ComponentsError> {
        Self::from_split_seconds_in_day(0, second_in_day)
    }

    /// Build a UTC time from a seconds count split in two parts for
    /// increased accuracy: the total is `second_in_day_a + second_in_day_b`.
    ///
    /// A total of at least 86 400 s is read as a leap second, like
    /// [`from_seconds_in_day`](Self::from_seconds_in_day).
    ///
    /// # Errors
    ///
    /// [`ComponentsError::OutOfRangeSeconds`] outside `[0, 86401)`.
    pub fn from_split_seconds_in_day(
        second_in_day_a: i32,
        second_in_day_b: f64,
    ) -> Result<Self, ComponentsError> {
        if (SECONDS_PER_DAY - f64::from(second_in_day_a)) - second_in_day_b > 0.0 {
            Self::from_seconds(second_in_day_a, second_in_day_b, 0.0, 60)
        } else {
            Self::from_seconds(second_in_day_a.saturating_sub(1), second_in_day_b, 1.0, 61)
        }
    }

    /// Build a UTC time from a seconds count, a leap magnitude and the
    /// duration of the current minute.
    ///
    /// Hour and minute come from `second_in_day_a + second_in_day_b` only;
    /// `leap` is added to the second of minute.  The arguments must satisfy
    ///
    /// ```text
    /// 0 <= second_in_day_a + second_in_day_b < 86400
    /// 0 <= leap <= minute_duration - 60       if minute_duration >= 60
    /// 0 >= leap >= minute_duration - 60       if minute_duration <  60
    /// 59 <= minute_duration <= 61
    /// ```
    ///
    /// A second of minute computed at or above `minute_duration` (possible
    /// through rounding only) is set to the largest `f64` below
    /// `minute_duration`.
    ///
    /// If `second_in_day_b` or `leap` is NaN, hour and minute come from
    /// `second_in_day_a` and the second of minute is NaN.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::OutOfRangeSeconds`] if an inequality above does not
    /// hold.
    pub fn from_seconds(
        second_in_day_a: i32,
        second_in_day_b: f64,
        leap: f64,
        minute_duration: i32,
    ) -> Result<Self, ComponentsError> {
        // split as a whole number of seconds and a fraction in [0, 1)
        let carry = second_in_day_b.floor();
        let whole_seconds = i64::from(second_in_day_a).saturating_add(carry as i64);
        let fractional = second_in_day_b - carry;

        if !(0..SECONDS_PER_DAY as i64).contains(&whole_seconds) {
            return Err(out_of_range(
                f64::from(second_in_day_a) + second_in_day_b,
                0.0,
                SECONDS_PER_DAY,
            ));
        }
        if !(59..=61).contains(&minute_duration) {
            return Err(out_of_range(f64::from(minute_duration), 59.0, 61.0));
        }
        let max_extra_seconds = f64::from(minute_duration - 60);
        if leap * max_extra_seconds < 0.0 || leap.abs() > max_extra_seconds.abs() {
            return Err(out_of_range(
                leap,
                max_extra_seconds.min(0.0),
                max_extra_seconds.max(0.0),
            ));
        }

        let hour = (whole_seconds / 3600) as u8;
        let minute = ((whole_seconds % 3600) / 60) as u8;
        let naive_second = (whole_seconds % 60) as f64 + (leap + fractional);
        if naive_second < 0.0 {
            return Err(out_of_range(naive_second, 0.0, f64::from(minute_duration)));
        }

        let minute_duration = f64::from(minute_duration);
        let second = if naive_second < minute_duration || naive_second.is_nan() {
            naive_second
        } else {
            trace!(
                naive_second,
                minute_duration,
                "second of minute rounded up to the minute duration, clamping"
            );
            next_down(minute_duration)
        };

        Ok(Self::from_parts_unchecked(hour, minute, second, 0))
    }
}

fn out_of_range(value: f64, min: f64, max: f64) -> ComponentsError {
    debug!(value, min, max, "rejected out of range seconds number");
    ComponentsError::OutOfRangeSeconds { value, min, max }
}

/// Largest `f64` strictly below a positive finite `value`.
#[inline]
fn next_down(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}

// ═══════════════════════════════════════════════════════════════════════════
// Accessors
// ═══════════════════════════════════════════════════════════════════════════

impl TimeComponents {
    /// Hour, 0 ..= 23.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0 ..= 59.
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of minute, in `[0, 61)`.  Values from 60 only occur during a
    /// leap second.
    #[inline]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Offset from UTC in minutes.
    #[inline]
    pub const fn minutes_from_utc(&self) -> i32 {
        self.minutes_from_utc
    }

    /// Seconds since local midnight, ignoring the UTC offset.
    pub fn seconds_in_local_day(&self) -> Seconds {
        Seconds::new(self.second + 60.0 * f64::from(self.minute) + 3600.0 * f64::from(self.hour))
    }

    /// Seconds since UTC midnight, applying the UTC offset.
    ///
    /// Ranges from `-minutes_from_utc * 60` to `86400 - minutes_from_utc * 60`.
    pub fn seconds_in_utc_day(&self) -> Seconds {
        let minutes = f64::from(self.minute) - f64::from(self.minutes_from_utc);
        Seconds::new(self.second + 60.0 * minutes + 3600.0 * f64::from(self.hour))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl PartialEq for TimeComponents {
    fn eq(&self, other: &Self) -> bool {
        self.hour == other.hour
            && self.minute == other.minute
            && self.minutes_from_utc == other.minutes_from_utc
            && (self.second.to_bits() == other.second.to_bits()
                || (self.second - other.second).abs() < SECOND_TOLERANCE)
    }
}

impl Eq for TimeComponents {}

/// The second of minute is left out so that values equal within the
/// tolerance always hash alike.
impl Hash for TimeComponents {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hour.hash(state);
        self.minute.hash(state);
        self.minutes_from_utc.hash(state);
    }
}

impl PartialOrd for TimeComponents {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Values equal within the 1e-8 s tolerance compare `Equal`, so `Equal`
/// is not transitive across a chain of near-identical seconds (`30.0`,
/// `30.0 + 6e-9`, `30.0 + 1.2e-8`).  `Less` and `Greater` stay transitive
/// and antisymmetric, and `cmp` agrees with `==`.
impl Ord for TimeComponents {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        // Distinct values sharing the same UTC instant are ordered by their
        // stored fields.
        self.seconds_in_utc_day()
            .value()
            .total_cmp(&other.seconds_in_utc_day().value())
            .then_with(|| self.minutes_from_utc.cmp(&other.minutes_from_utc))
            .then_with(|| self.hour.cmp(&other.hour))
            .then_with(|| self.minute.cmp(&other.minute))
            .then_with(|| self.second.total_cmp(&other.second))
    }
}

/// `hh:mm:ss.sss+hh:mm`.
impl fmt::Display for TimeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes_from_utc < 0 { '-' } else { '+' };
        let offset = self.minutes_from_utc.unsigned_abs();
        write!(
            f,
            "{:02}:{:02}:{:06.3}{}{:02}:{:02}",
            self.hour,
            self.minute,
            self.second,
            sign,
            offset / 60,
            offset % 60
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeComponents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TimeComponents", 4)?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("minute", &self.minute)?;
        s.serialize_field("second", &self.second)?;
        s.serialize_field("minutes_from_utc", &self.minutes_from_utc)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeComponents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            hour: u8,
            minute: u8,
            second: f64,
            #[serde(default)]
            minutes_from_utc: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::with_utc_offset(raw.hour, raw.minute, raw.second, raw.minutes_from_utc)
            .map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
