// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date and time-of-day holder with seconds-offset arithmetic.

use std::cmp::Ordering;
use std::fmt;

use qtty::Seconds;
use tracing::debug;

use crate::date::DateComponents;
use crate::error::ComponentsError;
use crate::time::{TimeComponents, SECONDS_PER_DAY};

/// A calendar date together with a time of day.
///
/// The UTC offset carried by the [`TimeComponents`] tags the whole value as
/// local or UTC.  Ordering is lexicographic: dates first, then times.
///
/// ```
/// use qtty::Seconds;
/// use tempoch_civil::DateTimeComponents;
///
/// let reference = DateTimeComponents::from_components(2000, 1, 1, 12, 0, 0.0)?;
/// let later = DateTimeComponents::from_offset(&reference, Seconds::new(-43_200.5))?;
/// assert_eq!(later.date().day(), 31);
/// assert_eq!(later.offset_from(&reference), Seconds::new(-43_200.5));
/// # Ok::<(), tempoch_civil::ComponentsError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTimeComponents {
    date: DateComponents,
    time: TimeComponents,
}

impl DateTimeComponents {
    /// The Julian epoch, -4712-01-01T12:00:00.
    pub const JULIAN_EPOCH: Self = Self::new(DateComponents::JULIAN_EPOCH, TimeComponents::H12);

    /// Build a new instance from its components.
    #[inline]
    pub const fn new(date: DateComponents, time: TimeComponents) -> Self {
        Self { date, time }
    }

    /// Build a UTC instance from raw components.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::InvalidDate`] or [`ComponentsError::InvalidTime`]
    /// for non-existent dates or clock fields.
    pub fn from_components(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, ComponentsError> {
        Ok(Self::new(
            DateComponents::new(year, month, day)?,
            TimeComponents::new(hour, minute, second)?,
        ))
    }

    /// Build a UTC instance at 00:00:00 of the given date.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::InvalidDate`] for non-existent dates.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ComponentsError> {
        Ok(Self::new(
            DateComponents::new(year, month, day)?,
            TimeComponents::H00,
        ))
    }

    /// Build an instance shifted by `offset` with respect to `reference`.
    ///
    /// Day overflow or underflow of the local seconds count is folded into
    /// the date; the UTC offset of `reference` is kept unchanged.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::DayOffsetOverflow`] if the shifted date leaves the
    /// supported range, [`ComponentsError::OutOfRangeSeconds`] if `offset` is
    /// not finite.
    pub fn from_offset(reference: &Self, offset: Seconds) -> Result<Self, ComponentsError> {
        let seconds = reference.time.seconds_in_local_day().value() + offset.value();

        let mut day_shift = (seconds / SECONDS_PER_DAY).floor();
        let mut seconds = seconds - SECONDS_PER_DAY * day_shift;
        if seconds >= SECONDS_PER_DAY {
            // rounding of tiny negative counts, not a leap second
            day_shift += 1.0;
            seconds -= SECONDS_PER_DAY;
        }
        let j2000_day = i64::from(reference.date.j2000_day()).saturating_add(day_shift as i64);
        let j2000_day = i32::try_from(j2000_day).map_err(|_| {
            debug!(j2000_day, "shifted date outside the i32 day range");
            ComponentsError::DayOffsetOverflow { j2000_day }
        })?;

        let time = TimeComponents::from_seconds_in_day(seconds)?;
        Ok(Self::new(
            DateComponents::from_j2000_day(j2000_day),
            TimeComponents::from_parts_unchecked(
                time.hour(),
                time.minute(),
                time.second(),
                reference.time.minutes_from_utc(),
            ),
        ))
    }

    /// Signed seconds elapsed from `other` to `self`, positive when `self`
    /// is later.
    ///
    /// Inverse of [`from_offset`](Self::from_offset).  UTC offsets of both
    /// instances are applied.
    pub fn offset_from(&self, other: &Self) -> Seconds {
        let date_offset = i64::from(self.date.j2000_day()) - i64::from(other.date.j2000_day());
        let time_offset = self.time.seconds_in_utc_day() - other.time.seconds_in_utc_day();
        Seconds::new(SECONDS_PER_DAY * date_offset as f64) + time_offset
    }

    /// Date component.
    #[inline]
    pub const fn date(&self) -> DateComponents {
        self.date
    }

    /// Time component.
    #[inline]
    pub const fn time(&self) -> TimeComponents {
        self.time
    }
}

impl PartialOrd for DateTimeComponents {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTimeComponents {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl fmt::Display for DateTimeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}
