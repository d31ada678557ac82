//! Property-based tests for `MonthDay` and its collaborators.
//!
//! 1. **Construction**: every day up to the leap-year length is accepted, anything past it is not
//! 2. **Ordering**: `cmp` follows `(month, day)` and agrees with `==` and `Hash`
//! 3. **Text form**: `Display` output parses back to the same value
//! 4. **Clamping**: `with` never fails and never leaves the new month
//! 5. **Adjustment**: pushing a month-day onto an ISO date keeps the year

use std::hash::{DefaultHasher, Hash, Hasher};

use month_day::{
    Adjuster, DateField, FieldBearing, LocalDate, MAX_YEAR, MIN_YEAR, Month, MonthDay, is_leap_year,
};
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_month() -> impl Strategy<Value = Month> {
    (1u8..=12).prop_map(|value| Month::new(value).unwrap())
}

fn arb_month_day() -> impl Strategy<Value = MonthDay> {
    arb_month().prop_flat_map(|month| {
        (1..=i32::from(month.max_length())).prop_map(move |day| MonthDay::new(month, day).unwrap())
    })
}

fn arb_year() -> impl Strategy<Value = i32> {
    prop_oneof![1600i32..=2400, MIN_YEAR..=MAX_YEAR]
}

fn hash_of(value: &MonthDay) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_valid_pairs_round_trip(month_day in arb_month_day()) {
        let month = i32::from(month_day.month_value());
        let day = i32::from(month_day.day_of_month());
        prop_assert_eq!(MonthDay::of(month, day), Ok(month_day));
        prop_assert_eq!(month_day.get(DateField::MonthOfYear), Ok(month));
        prop_assert_eq!(month_day.get(DateField::DayOfMonth), Ok(day));
    }

    #[test]
    fn prop_days_past_month_length_fail(month in arb_month(), excess in 1i32..1000) {
        let day = i32::from(month.max_length()) + excess;
        let result = MonthDay::new(month, day);
        prop_assert!(result.is_err());
        prop_assert_eq!(result.unwrap_err().field(), Some(DateField::DayOfMonth));
    }

    #[test]
    fn prop_ordering_is_lexicographic(a in arb_month_day(), b in arb_month_day()) {
        let expected = (a.month_value(), a.day_of_month()).cmp(&(b.month_value(), b.day_of_month()));
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(a == b, a.cmp(&b).is_eq());
        prop_assert_eq!(a.is_after(&b), expected.is_gt());
        prop_assert_eq!(a.is_before(&b), expected.is_lt());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        prop_assert_eq!(a.hash_code() == b.hash_code(), a == b);
    }

    #[test]
    fn prop_display_parses_back(month_day in arb_month_day()) {
        let text = month_day.to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert_eq!(text.parse::<MonthDay>(), Ok(month_day));
    }

    #[test]
    fn prop_with_month_clamps(month_day in arb_month_day(), month in arb_month()) {
        let moved = month_day.with(month);
        prop_assert_eq!(moved.month(), month);
        prop_assert_eq!(moved.day_of_month(), month_day.day_of_month().min(month.max_length()));
        prop_assert_eq!(month_day.with_month(i32::from(month.get())), Ok(moved));
    }

    #[test]
    fn prop_at_year_only_moves_leap_day(month_day in arb_month_day(), year in arb_year()) {
        let date = month_day.at_year(year).unwrap();
        prop_assert_eq!(date.year(), year);
        prop_assert_eq!(date.month(), month_day.month());
        if month_day.is_valid_year(year) {
            prop_assert_eq!(date.day(), month_day.day_of_month());
        } else {
            prop_assert!(!is_leap_year(year));
            prop_assert_eq!(date.day(), 28);
        }
    }

    #[test]
    fn prop_adjust_into_keeps_year(
        month_day in arb_month_day(),
        year in 1600i32..=2400,
        day_of_year in 1i32..=365
    ) {
        let target = LocalDate::of_year_day(year, day_of_year).unwrap();
        let adjusted = month_day.adjust_into(&target).unwrap();
        prop_assert_eq!(adjusted.year(), year);
        prop_assert_eq!(adjusted.month(), month_day.month());
        prop_assert_eq!(adjusted.day(), month_day.day_of_month().min(adjusted.length_of_month()));
        prop_assert!(MonthDay::from(&adjusted).unwrap().is_valid_year(year));
    }

    #[test]
    fn prop_epoch_day_round_trip(epoch_day in -1_000_000i64..1_000_000) {
        let date = LocalDate::from_epoch_day(epoch_day).unwrap();
        prop_assert_eq!(date.to_epoch_day(), epoch_day);
        prop_assert_eq!(date.plus_days(1).unwrap().to_epoch_day(), epoch_day + 1);
    }
}
