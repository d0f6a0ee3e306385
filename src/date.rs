// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar date broken up as year, month and day.
//!
//! [`DateComponents`] uses the astronomical convention for calendars: a year
//! zero is present between years −1 and +1, and ten days are missing in 1582.
//!
//! - up to 0000-12-31: proleptic Julian calendar
//! - from 0001-01-01 to 1582-10-04: Julian calendar
//! - from 1582-10-15: Gregorian calendar
//!
//! Every date maps one-to-one onto a signed day count with respect to
//! 2000-01-01 (the *J2000 day*).  The whole `i32` range of day counts is
//! representable, bounded by [`DateComponents::MIN_EPOCH`] and
//! [`DateComponents::MAX_EPOCH`].
//!
//! ```
//! use tempoch_civil::DateComponents;
//!
//! let date = DateComponents::new(1995, 1, 1)?;
//! assert_eq!(date.j2000_day(), -1826);
//! assert_eq!(date.calendar_week(), 52); // 1994-W52-7
//! assert_eq!(date.day_of_week(), 7);
//! # Ok::<(), tempoch_civil::ComponentsError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::calendar::{MonthDayModel, YearModel};
use crate::error::ComponentsError;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Offset between the J2000 day and the modified Julian day.
const MJD_TO_J2000: i64 = 51_544;

/// A calendar day of the hybrid Julian/Gregorian calendar.
///
/// Instances are immutable and always name an existing day: every public
/// constructor either validates its input or derives the fields from a day
/// count.  Equality and hashing use the stored triple, ordering uses the
/// J2000 day; both agree because the mapping is a bijection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateComponents {
    year: i32,
    month: u8,
    day: u8,
}

// ═══════════════════════════════════════════════════════════════════════════
// Reference epochs
// ═══════════════════════════════════════════════════════════════════════════

impl DateComponents {
    /// Reference epoch for Julian dates: -4712-01-01.
    ///
    /// With the year-zero convention this lies in year −4712, not −4713 as
    /// printed by tools that skip year zero.
    pub const JULIAN_EPOCH: Self = Self::from_ymd_unchecked(-4712, 1, 1);

    /// Reference epoch for modified Julian dates: 1858-11-17.
    pub const MODIFIED_JULIAN_EPOCH: Self = Self::from_ymd_unchecked(1858, 11, 17);

    /// Reference epoch for 1950 dates: 1950-01-01.
    pub const FIFTIES_EPOCH: Self = Self::from_ymd_unchecked(1950, 1, 1);

    /// Reference epoch for the CCSDS Time Code Format (CCSDS 301.0-B-4): 1958-01-01.
    pub const CCSDS_EPOCH: Self = Self::from_ymd_unchecked(1958, 1, 1);

    /// Reference epoch for Galileo System Time: 1999-08-22.
    pub const GALILEO_EPOCH: Self = Self::from_ymd_unchecked(1999, 8, 22);

    /// Reference epoch for GPS weeks: 1980-01-06.
    pub const GPS_EPOCH: Self = Self::from_ymd_unchecked(1980, 1, 6);

    /// Reference epoch for QZSS weeks: 1980-01-06.
    pub const QZSS_EPOCH: Self = Self::from_ymd_unchecked(1980, 1, 6);

    /// Reference epoch for IRNSS weeks: 1999-08-22.
    pub const IRNSS_EPOCH: Self = Self::from_ymd_unchecked(1999, 8, 22);

    /// Reference epoch for BeiDou weeks: 2006-01-01.
    pub const BEIDOU_EPOCH: Self = Self::from_ymd_unchecked(2006, 1, 1);

    /// Reference epoch for GLONASS four-year interval numbers: 1996-01-01.
    pub const GLONASS_EPOCH: Self = Self::from_ymd_unchecked(1996, 1, 1);

    /// J2000.0 reference epoch: 2000-01-01.
    pub const J2000_EPOCH: Self = Self::from_ymd_unchecked(2000, 1, 1);

    /// Java / Unix reference epoch: 1970-01-01.
    pub const JAVA_EPOCH: Self = Self::from_ymd_unchecked(1970, 1, 1);

    /// Latest representable date, 5881610-07-11 (`i32::MAX` days after J2000).
    pub const MAX_EPOCH: Self = Self::from_j2000_day(i32::MAX);

    /// Earliest representable date, -5877490-03-03 (`i32::MIN` days from J2000).
    pub const MIN_EPOCH: Self = Self::from_j2000_day(i32::MIN);
}

// ═══════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════

impl DateComponents {
    #[inline]
    const fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Build a date from its components.
    ///
    /// `year` may be zero or negative for BC years.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::InvalidDate`] if the month is outside `1..=12`, the
    /// day does not exist in that month (February 29 of a common year), the
    /// date falls in the 1582-10-05 ..= 1582-10-14 gap, or lies outside
    /// [`MIN_EPOCH`](Self::MIN_EPOCH) ..= [`MAX_EPOCH`](Self::MAX_EPOCH).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ComponentsError> {
        let invalid = || {
            debug!(year, month, day, "rejected non-existent date");
            ComponentsError::InvalidDate { year, month, day }
        };

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }

        let candidate = Self::from_ymd_unchecked(year, month, day);
        match i32::try_from(j2000_day_of(i64::from(year), month, day)) {
            // A triple that does not survive the round trip through its day
            // count (Feb 30, 1582-10-10, …) does not exist.
            Ok(j2000_day) if Self::from_j2000_day(j2000_day) == candidate => Ok(candidate),
            _ => Err(invalid()),
        }
    }

    /// Build a date from a year and a day number within that year.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::InvalidDayNumber`] if `day_number` is outside
    /// `1..=365` (`1..=366` on leap years; year 1582 has 355 days).
    pub fn from_day_of_year(year: i32, day_number: u16) -> Result<Self, ComponentsError> {
        let j2000_day = j2000_day_of(i64::from(year) - 1, 12, 31) + i64::from(day_number);
        match i32::try_from(j2000_day).map(Self::from_j2000_day) {
            Ok(date) if date.year == year && date.day_of_year() == day_number => Ok(date),
            _ => {
                debug!(year, day_number, "rejected non-existent day number");
                Err(ComponentsError::InvalidDayNumber { year, day_number })
            }
        }
    }

    /// Build a date from its day offset with respect to
    /// [`J2000_EPOCH`](Self::J2000_EPOCH).
    ///
    /// Every `i32` is a valid offset, so this constructor cannot fail.
    pub const fn from_j2000_day(j2000_day: i32) -> Self {
        let j2000_day = j2000_day as i64;
        let year_model = YearModel::for_day(j2000_day);
        let year = year_model.year(j2000_day);
        let day_in_year = j2000_day - year_model.last_day_of_year(year - 1);

        let month_day = MonthDayModel::for_year(year_model, year);
        let month = month_day.month(day_in_year);
        Self {
            year: year as i32,
            month,
            day: month_day.day(day_in_year, month),
        }
    }

    /// Build a date from its day offset with respect to a reference epoch.
    ///
    /// Mostly useful to build a date from a modified Julian day (with
    /// [`MODIFIED_JULIAN_EPOCH`](Self::MODIFIED_JULIAN_EPOCH)) or from a GPS
    /// day count (with [`GPS_EPOCH`](Self::GPS_EPOCH)).
    ///
    /// # Errors
    ///
    /// [`ComponentsError::DayOffsetOverflow`] if the resulting day leaves
    /// the supported range.
    pub fn from_epoch_offset(epoch: Self, offset: i32) -> Result<Self, ComponentsError> {
        let j2000_day = i64::from(epoch.j2000_day()) + i64::from(offset);
        i32::try_from(j2000_day)
            .map(Self::from_j2000_day)
            .map_err(|_| {
                debug!(j2000_day, "day offset outside the i32 range");
                ComponentsError::DayOffsetOverflow { j2000_day }
            })
    }

    /// Build a date from ISO-8601 week components.
    ///
    /// Week 1 is the week holding the first Thursday of `week_year`, so it
    /// may start in the previous calendar year; likewise the last week may
    /// end in the next one.  For instance 1994-W52-7 is 1995-01-01 and
    /// 1997-W01-2 is 1996-12-31.
    ///
    /// # Errors
    ///
    /// [`ComponentsError::InvalidWeekDate`] if `week` or `day_of_week`
    /// (1 = Monday ..= 7 = Sunday) are out of range, including week 53 of a
    /// 52-week year.
    pub fn from_week_components(
        week_year: i32,
        week: u8,
        day_of_week: u8,
    ) -> Result<Self, ComponentsError> {
        let invalid = || {
            debug!(week_year, week, day_of_week, "rejected non-existent week date");
            ComponentsError::InvalidWeekDate {
                year: week_year,
                week,
                day_of_week,
            }
        };

        if !(1..=53).contains(&week) || !(1..=7).contains(&day_of_week) {
            return Err(invalid());
        }

        let j2000_day = first_week_monday(i64::from(week_year))
            + 7 * i64::from(week)
            + i64::from(day_of_week)
            - 8;
        let date = i32::try_from(j2000_day)
            .map(Self::from_j2000_day)
            .map_err(|_| invalid())?;

        if date.calendar_week() != week || date.day_of_week() != day_of_week {
            return Err(invalid());
        }
        Ok(date)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Accessors
// ═══════════════════════════════════════════════════════════════════════════

impl DateComponents {
    /// Year number (zero or negative for BC years).
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 ..= 12.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1 ..= 31.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day offset with respect to [`J2000_EPOCH`](Self::J2000_EPOCH).
    ///
    /// Exact inverse of [`from_j2000_day`](Self::from_j2000_day).
    #[inline]
    pub const fn j2000_day(&self) -> i32 {
        // Every constructed date lies within MIN_EPOCH ..= MAX_EPOCH.
        self.wide_j2000_day() as i32
    }

    /// Modified Julian day.
    ///
    /// Returned as `i64` since the dates near [`MAX_EPOCH`](Self::MAX_EPOCH)
    /// overflow `i32` once shifted.
    #[inline]
    pub const fn mjd(&self) -> i64 {
        MJD_TO_J2000 + self.wide_j2000_day()
    }

    /// ISO-8601 calendar week number, 1 ..= 53.
    ///
    /// Up to three days at the start of the year may belong to the last week
    /// of the previous year, and up to three days at its end to week 1 of
    /// the next one.
    pub fn calendar_week(&self) -> u8 {
        let year = i64::from(self.year);
        let first_monday = first_week_monday(year);
        let mut days_since_first_monday = self.wide_j2000_day() - first_monday;
        if days_since_first_monday < 0 {
            // still in a week of the previous year
            days_since_first_monday += first_monday - first_week_monday(year - 1);
        } else if days_since_first_monday > 363 {
            let week_year_length = first_week_monday(year + 1) - first_monday;
            if days_since_first_monday >= week_year_length {
                days_since_first_monday -= week_year_length;
            }
        }
        (1 + days_since_first_monday / 7) as u8
    }

    /// Day of week, from 1 (Monday) to 7 (Sunday).
    pub const fn day_of_week(&self) -> u8 {
        // in -6 ..= 6
        let dow = (self.wide_j2000_day() + 6) % 7;
        (if dow < 1 { dow + 7 } else { dow }) as u8
    }

    /// Day number within the year, from 1 (January 1st) to 365 or 366.
    pub const fn day_of_year(&self) -> u16 {
        (self.wide_j2000_day() - j2000_day_of(self.year as i64 - 1, 12, 31)) as u16
    }

    /// Whether the year of this date is a leap year in the calendar in force
    /// at this date.
    pub const fn is_leap_year(&self) -> bool {
        let year = self.year as i64;
        YearModel::for_date(year, self.month, self.day).is_leap(year)
    }

    #[inline]
    const fn wide_j2000_day(&self) -> i64 {
        j2000_day_of(self.year as i64, self.month, self.day)
    }
}

/// J2000 day of a calendar triple, `month` in `1..=12`.
const fn j2000_day_of(year: i64, month: u8, day: u8) -> i64 {
    let year_model = YearModel::for_date(year, month, day);
    let month_day = MonthDayModel::for_year(year_model, year);
    year_model.last_day_of_year(year - 1) + month_day.day_in_year(month, day)
}

/// J2000 day of the Monday starting ISO week 1 of `year`.
fn first_week_monday(year: i64) -> i64 {
    let year_first = j2000_day_of(year, 1, 1);
    let offset_to_monday = 4 - (year_first + 2) % 7;
    year_first + offset_to_monday + if offset_to_monday > 3 { -7 } else { 0 }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl PartialOrd for DateComponents {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateComponents {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wide_j2000_day().cmp(&other.wide_j2000_day())
    }
}

/// ISO-8601 `YYYY-MM-DD`; years before 0 get a `-` sign, years past 9999 a
/// `+` sign.
impl fmt::Display for DateComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.unsigned_abs();
        match self.year {
            y if y < 0 => write!(f, "-{year:04}")?,
            y if y > 9999 => write!(f, "+{year}")?,
            _ => write!(f, "{year:04}")?,
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateComponents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DateComponents", 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateComponents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u8,
            day: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
