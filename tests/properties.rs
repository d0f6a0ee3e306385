use proptest::prelude::*;
use qtty::Seconds;
use tempoch_civil::{DateComponents, DateTimeComponents, TimeComponents};

fn days_in_month(year: i32, month: u8) -> u8 {
    let leap = DateComponents::new(year, 1, 1)
        .map(|d| d.is_leap_year())
        .unwrap_or(false);
    match month {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

proptest! {
    #[test]
    fn every_day_offset_round_trips(j2000_day in any::<i32>()) {
        let date = DateComponents::from_j2000_day(j2000_day);
        prop_assert_eq!(date.j2000_day(), j2000_day);
        prop_assert_eq!(DateComponents::new(date.year(), date.month(), date.day()), Ok(date));
        prop_assert_eq!(
            DateComponents::from_day_of_year(date.year(), date.day_of_year()),
            Ok(date)
        );
    }

    #[test]
    fn week_components_round_trip(j2000_day in -1_000_000i32..1_000_000) {
        let date = DateComponents::from_j2000_day(j2000_day);
        let week = date.calendar_week();
        let day_of_week = date.day_of_week();
        prop_assert!((1..=53).contains(&week));
        prop_assert!((1..=7).contains(&day_of_week));

        // the ISO week-year differs from the calendar year near year ends;
        // 1582 is short, so its last week is numbered below 52
        let week_year = match (date.month(), week) {
            (1, w) if w > 10 => date.year() - 1,
            (12, 1) => date.year() + 1,
            _ => date.year(),
        };
        prop_assert_eq!(
            DateComponents::from_week_components(week_year, week, day_of_week),
            Ok(date)
        );
    }

    #[test]
    fn consecutive_days_advance_day_of_week(j2000_day in -1_000_000i32..1_000_000) {
        let today = DateComponents::from_j2000_day(j2000_day);
        let tomorrow = DateComponents::from_j2000_day(j2000_day + 1);
        prop_assert_eq!(tomorrow.day_of_week() % 7, (today.day_of_week() + 1) % 7);
        prop_assert!(today < tomorrow);
    }

    #[test]
    fn month_lengths_follow_leap_rule(year in -10_000i32..10_000, month in 1u8..=12) {
        prop_assume!(!(year == 1582 && month == 10));
        let length = days_in_month(year, month);
        prop_assert!(DateComponents::new(year, month, length).is_ok());
        prop_assert!(DateComponents::new(year, month, length + 1).is_err());
    }

    #[test]
    fn ordering_agrees_with_day_offsets(a in any::<i32>(), b in any::<i32>()) {
        let da = DateComponents::from_j2000_day(a);
        let db = DateComponents::from_j2000_day(b);
        prop_assert_eq!(da.cmp(&db), a.cmp(&b));
    }

    #[test]
    fn seconds_in_day_round_trip(seconds in 0.0f64..86_401.0) {
        let time = TimeComponents::from_seconds_in_day(seconds).unwrap();
        prop_assert!(time.hour() <= 23);
        prop_assert!(time.minute() <= 59);
        prop_assert!(time.second() >= 0.0 && time.second() < 61.0);
        let back = time.seconds_in_local_day().value();
        prop_assert!((back - seconds).abs() < 1e-7, "{} came back as {}", seconds, back);
    }

    #[test]
    fn time_ordering_is_transitive(
        a in 0.0f64..86_400.0,
        b in 0.0f64..86_400.0,
        c in 0.0f64..86_400.0,
    ) {
        let ta = TimeComponents::from_seconds_in_day(a).unwrap();
        let tb = TimeComponents::from_seconds_in_day(b).unwrap();
        let tc = TimeComponents::from_seconds_in_day(c).unwrap();
        if ta <= tb && tb <= tc {
            prop_assert!(ta <= tc);
        }
        prop_assert_eq!(ta.cmp(&tb), tb.cmp(&ta).reverse());
    }

    #[test]
    fn date_time_offset_is_inverse(
        j2000_day in -100_000i32..100_000,
        seconds in 0.0f64..86_400.0,
        minutes_from_utc in -720i32..=840,
        offset in -1.0e8f64..1.0e8,
    ) {
        let time = TimeComponents::from_seconds_in_day(seconds).unwrap();
        let time = TimeComponents::with_utc_offset(
            time.hour(),
            time.minute(),
            time.second(),
            minutes_from_utc,
        )
        .unwrap();
        let reference = DateTimeComponents::new(DateComponents::from_j2000_day(j2000_day), time);

        let shifted = DateTimeComponents::from_offset(&reference, Seconds::new(offset)).unwrap();
        prop_assert_eq!(shifted.time().minutes_from_utc(), minutes_from_utc);
        let back = shifted.offset_from(&reference).value();
        prop_assert!((back - offset).abs() < 1e-5, "{} came back as {}", offset, back);
        if offset.abs() > 1e-3 {
            prop_assert_eq!(shifted > reference, offset > 0.0);
        }
    }
}
