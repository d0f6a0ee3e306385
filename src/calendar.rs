// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year and month/day sequencing rules of the hybrid civil calendar.
//!
//! The crate follows the astronomical convention: a year zero sits between
//! years −1 and +1, and ten days are missing in October 1582.
//!
//! | Model | Range | Leap rule |
//! |-------|-------|-----------|
//! | [`YearModel::ProlepticJulian`] | up to 0000-12-31 | `y % 4 == 0` |
//! | [`YearModel::Julian`] | 0001-01-01 ..= 1582-10-04 | `y % 4 == 0` |
//! | [`YearModel::Gregorian`] | from 1582-10-15 | `y % 4 == 0 && (y % 400 == 0 \|\| y % 100 != 0)` |
//!
//! All day numbers are offsets with respect to 2000-01-01 (J2000 day 0).
//! Arithmetic is carried out in `i64` so that the extreme dates bounding the
//! `i32` day range never overflow intermediate terms.

// ---------------------------------------------------------------------------
// Year sequencing
// ---------------------------------------------------------------------------

/// J2000 day of 0001-01-01, first day of the Julian calendar.
pub(crate) const JULIAN_START_DAY: i64 = -730_121;

/// J2000 day of 1582-10-15, first day of the Gregorian calendar.
pub(crate) const GREGORIAN_START_DAY: i64 = -152_384;

/// Calendar rule used to sequence years.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum YearModel {
    /// Julian leap rule extended backwards, up to 0000-12-31.
    ProlepticJulian,
    /// Julian calendar, from 0001-01-01 to 1582-10-04.
    Julian,
    /// Gregorian calendar, from 1582-10-15.
    Gregorian,
}

impl YearModel {
    /// Model in force on the given J2000 day.
    #[inline]
    pub(crate) const fn for_day(j2000_day: i64) -> Self {
        if j2000_day < JULIAN_START_DAY {
            Self::ProlepticJulian
        } else if j2000_day < GREGORIAN_START_DAY {
            Self::Julian
        } else {
            Self::Gregorian
        }
    }

    /// Model in force for a calendar triple.
    ///
    /// Agrees with [`for_day`](Self::for_day) on every valid date.
    #[inline]
    pub(crate) const fn for_date(year: i64, month: u8, day: u8) -> Self {
        if year < 1 {
            Self::ProlepticJulian
        } else if year < 1582 || (year == 1582 && (month < 10 || (month == 10 && day < 5))) {
            Self::Julian
        } else {
            Self::Gregorian
        }
    }

    /// Year containing the given J2000 day.
    pub(crate) const fn year(self, j2000_day: i64) -> i64 {
        match self {
            Self::ProlepticJulian => -((-4 * j2000_day - 2_920_488) / 1461),
            Self::Julian => (4 * j2000_day + 2_921_948) / 1461,
            Self::Gregorian => {
                let year = (400 * j2000_day + 292_194_288) / 146_097;
                // The estimate is one unit too high for 240 days of the
                // 400-year cycle.
                if j2000_day <= self.last_day_of_year(year - 1) {
                    year - 1
                } else {
                    year
                }
            }
        }
    }

    /// J2000 day of December 31st of `year`.
    pub(crate) const fn last_day_of_year(self, year: i64) -> i64 {
        match self {
            Self::ProlepticJulian => 365 * year + (year + 1) / 4 - 730_123,
            Self::Julian => 365 * year + year / 4 - 730_122,
            Self::Gregorian => 365 * year + year / 4 - year / 100 + year / 400 - 730_120,
        }
    }

    /// Whether `year` has 366 days under this model.
    #[inline]
    pub(crate) const fn is_leap(self, year: i64) -> bool {
        match self {
            Self::ProlepticJulian | Self::Julian => year % 4 == 0,
            Self::Gregorian => year % 4 == 0 && (year % 400 == 0 || year % 100 != 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Month / day sequencing
// ---------------------------------------------------------------------------

/// Cumulative day count at the end of the previous month, leap years.
const LEAP_PREVIOUS_MONTH_END: [u16; 13] =
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Cumulative day count at the end of the previous month, common years.
const COMMON_PREVIOUS_MONTH_END: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Month succession within a year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MonthDayModel {
    /// 366-day year.
    Leap,
    /// 365-day year.
    Common,
}

impl MonthDayModel {
    #[inline]
    pub(crate) const fn for_year(year_model: YearModel, year: i64) -> Self {
        if year_model.is_leap(year) {
            Self::Leap
        } else {
            Self::Common
        }
    }

    #[inline]
    const fn previous_month_end(self, month: u8) -> i64 {
        let table = match self {
            Self::Leap => &LEAP_PREVIOUS_MONTH_END,
            Self::Common => &COMMON_PREVIOUS_MONTH_END,
        };
        table[month as usize] as i64
    }

    /// Month (1..=12) containing the given day of year (1..=366).
    pub(crate) const fn month(self, day_in_year: i64) -> u8 {
        if day_in_year < 32 {
            return 1;
        }
        let k = match self {
            Self::Leap => 313,
            Self::Common => 323,
        };
        ((10 * day_in_year + k) / 306) as u8
    }

    /// Day of month for a day of year already known to fall in `month`.
    #[inline]
    pub(crate) const fn day(self, day_in_year: i64, month: u8) -> u8 {
        (day_in_year - self.previous_month_end(month)) as u8
    }

    /// Day of year of `month`/`day`.
    ///
    /// `month` must lie in `1..=12`.
    #[inline]
    pub(crate) const fn day_in_year(self, month: u8, day: u8) -> i64 {
        day as i64 + self.previous_month_end(month)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_formula_matches_tables() {
        for model in [MonthDayModel::Leap, MonthDayModel::Common] {
            let year_length = match model {
                MonthDayModel::Leap => 366,
                MonthDayModel::Common => 365,
            };
            for day_in_year in 1..=year_length {
                let month = model.month(day_in_year);
                let day = model.day(day_in_year, month);
                assert!((1..=12).contains(&month), "{model:?} doy {day_in_year}");
                assert!((1..=31).contains(&day), "{model:?} doy {day_in_year}");
                assert_eq!(model.day_in_year(month, day), day_in_year);
            }
        }
    }

    #[test]
    fn test_february_length_follows_model() {
        assert_eq!(MonthDayModel::Leap.day_in_year(3, 1) - 1, 60);
        assert_eq!(MonthDayModel::Common.day_in_year(3, 1) - 1, 59);
    }

    #[test]
    fn test_leap_rules() {
        assert!(YearModel::Gregorian.is_leap(2000));
        assert!(!YearModel::Gregorian.is_leap(1900));
        assert!(YearModel::Gregorian.is_leap(2024));
        assert!(!YearModel::Gregorian.is_leap(2023));
        assert!(YearModel::Julian.is_leap(1500));
        assert!(YearModel::ProlepticJulian.is_leap(0));
        assert!(YearModel::ProlepticJulian.is_leap(-4));
        assert!(!YearModel::ProlepticJulian.is_leap(-1));
    }

    #[test]
    fn test_last_day_of_year_anchors() {
        assert_eq!(YearModel::Gregorian.last_day_of_year(1999), -1);
        assert_eq!(YearModel::Julian.last_day_of_year(0), JULIAN_START_DAY - 1);
        // year 0 is leap
        assert_eq!(YearModel::ProlepticJulian.last_day_of_year(-1) + 366, JULIAN_START_DAY - 1);
        assert_eq!(YearModel::Gregorian.last_day_of_year(1581) + 288, GREGORIAN_START_DAY);
    }

    #[test]
    fn test_year_is_inverse_of_last_day_of_year() {
        for model in [YearModel::ProlepticJulian, YearModel::Julian, YearModel::Gregorian] {
            let years = match model {
                YearModel::ProlepticJulian => -2_000..=0,
                YearModel::Julian => 1..=1_581,
                YearModel::Gregorian => 1_583..=4_000,
            };
            for year in years {
                let first = model.last_day_of_year(year - 1) + 1;
                let last = model.last_day_of_year(year);
                assert_eq!(model.year(first), year, "{model:?} first day of {year}");
                assert_eq!(model.year(last), year, "{model:?} last day of {year}");
            }
        }
    }

    #[test]
    fn test_model_selection_agrees_at_boundaries() {
        assert_eq!(YearModel::for_day(JULIAN_START_DAY - 1), YearModel::ProlepticJulian);
        assert_eq!(YearModel::for_date(0, 12, 31), YearModel::ProlepticJulian);
        assert_eq!(YearModel::for_day(JULIAN_START_DAY), YearModel::Julian);
        assert_eq!(YearModel::for_date(1, 1, 1), YearModel::Julian);
        assert_eq!(YearModel::for_day(GREGORIAN_START_DAY - 1), YearModel::Julian);
        assert_eq!(YearModel::for_date(1582, 10, 4), YearModel::Julian);
        assert_eq!(YearModel::for_day(GREGORIAN_START_DAY), YearModel::Gregorian);
        assert_eq!(YearModel::for_date(1582, 10, 15), YearModel::Gregorian);
        assert_eq!(YearModel::for_date(1582, 11, 1), YearModel::Gregorian);
    }
}
