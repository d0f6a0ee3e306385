// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil Calendar Components
//!
//! This crate provides calendar date and time-of-day holders for
//! astronomical and space-flight time keeping.
//!
//! # Core types
//!
//! - [`DateComponents`] — year/month/day in the hybrid Julian/Gregorian
//!   calendar, convertible to and from a day count relative to 2000-01-01.
//! - [`TimeComponents`] — hour/minute/second of day, able to represent
//!   leap seconds and an offset from UTC.
//! - [`DateTimeComponents`] — a date and a time of day, with offset
//!   arithmetic in seconds.
//! - [`ComponentsError`] — error returned by every fallible constructor.
//!
//! # Calendar
//!
//! Dates follow the astronomical year numbering (year 0 exists) and switch
//! calendar rules at fixed days:
//!
//! | Range | Calendar |
//! |-------|----------|
//! | up to 0000-12-31 | proleptic Julian |
//! | 0001-01-01 ..= 1582-10-04 | Julian |
//! | from 1582-10-15 | Gregorian |
//!
//! The dates 1582-10-05 ..= 1582-10-14 do not exist.  Every `i32` day
//! offset from J2000 maps to a date, from [`DateComponents::MIN_EPOCH`] to
//! [`DateComponents::MAX_EPOCH`].
//!
//! # Reference epochs
//!
//! | Constant | Date |
//! |----------|------|
//! | [`DateComponents::JULIAN_EPOCH`] | -4712-01-01 |
//! | [`DateComponents::MODIFIED_JULIAN_EPOCH`] | 1858-11-17 |
//! | [`DateComponents::FIFTIES_EPOCH`] | 1950-01-01 |
//! | [`DateComponents::CCSDS_EPOCH`] | 1958-01-01 |
//! | [`DateComponents::JAVA_EPOCH`] | 1970-01-01 |
//! | [`DateComponents::GPS_EPOCH`] | 1980-01-06 |
//! | [`DateComponents::QZSS_EPOCH`] | 1980-01-06 |
//! | [`DateComponents::GLONASS_EPOCH`] | 1996-01-01 |
//! | [`DateComponents::GALILEO_EPOCH`] | 1999-08-22 |
//! | [`DateComponents::IRNSS_EPOCH`] | 1999-08-22 |
//! | [`DateComponents::J2000_EPOCH`] | 2000-01-01 |
//! | [`DateComponents::BEIDOU_EPOCH`] | 2006-01-01 |
//!
//! # `chrono` interop
//!
//! Dates, times and UTC date-times convert to and from `chrono` types.
//! Those conversions keep the day, not its label: `chrono` is proleptic
//! Gregorian throughout.

mod calendar;
mod chrono_ext;
mod date;
mod date_time;
mod error;
mod time;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::DateComponents;
pub use date_time::DateTimeComponents;
pub use error::ComponentsError;
pub use time::TimeComponents;
