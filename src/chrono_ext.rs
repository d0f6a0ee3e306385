// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversions to and from `chrono` civil and UTC types.
//!
//! `chrono` labels every day with the proleptic Gregorian calendar, whereas
//! [`DateComponents`] switches to the Julian calendar before 1582-10-15.
//! Conversions preserve the *day*, not the label: Julian 1582-10-04 is
//! chrono's 1582-10-14.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};

use crate::{DateComponents, DateTimeComponents, TimeComponents};

/// `NaiveDate::num_days_from_ce` of 2000-01-01.
const CE_DAYS_AT_J2000: i32 = 730_120;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

impl DateComponents {
    /// The same day as a `chrono::NaiveDate`.
    ///
    /// Returns `None` outside chrono's representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.j2000_day()
            .checked_add(CE_DAYS_AT_J2000)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }
}

impl From<NaiveDate> for DateComponents {
    fn from(date: NaiveDate) -> Self {
        // chrono's ±262 143 years fit well inside the i32 day range.
        Self::from_j2000_day(date.num_days_from_ce() - CE_DAYS_AT_J2000)
    }
}

impl TimeComponents {
    /// Local clock fields as a `chrono::NaiveTime`, truncated to the
    /// nanosecond.
    ///
    /// A leap second maps onto chrono's `hh:mm:59` with a nanosecond field
    /// of at least one billion.  Returns `None` for a NaN second.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.second().is_finite() {
            return None;
        }
        let whole = self.second().floor();
        let mut second = whole as u32;
        let mut nanos = ((self.second() - whole) * 1e9) as u32;
        if second >= 60 {
            second = 59;
            nanos += NANOS_PER_SECOND;
        }
        NaiveTime::from_hms_nano_opt(self.hour().into(), self.minute().into(), second, nanos)
    }
}

impl From<NaiveTime> for TimeComponents {
    fn from(time: NaiveTime) -> Self {
        // chrono folds leap seconds into the nanosecond field.
        let second = f64::from(time.second()) + f64::from(time.nanosecond()) / 1e9;
        Self::from_parts_unchecked(time.hour() as u8, time.minute() as u8, second, 0)
    }
}

impl DateTimeComponents {
    /// Local date and clock fields as a `chrono::NaiveDateTime`, ignoring
    /// the UTC offset.
    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(
            self.date().to_naive_date()?,
            self.time().to_naive_time()?,
        ))
    }

    /// Convert to a `chrono::DateTime<Utc>`, applying the UTC offset.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range or the offset exceeds a day.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let offset = FixedOffset::east_opt(self.time().minutes_from_utc().checked_mul(60)?)?;
        offset
            .from_local_datetime(&self.to_naive_date_time()?)
            .single()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl From<DateTime<Utc>> for DateTimeComponents {
    fn from(datetime: DateTime<Utc>) -> Self {
        let naive = datetime.naive_utc();
        Self::new(naive.date().into(), naive.time().into())
    }
}
