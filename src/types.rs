use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};
use crate::{DateField, DateTimeError, LocalDate, MonthDay, Result, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A proleptic ISO year in the range `MIN_YEAR..=MAX_YEAR`.
/// Year 0 is 1 BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating it against the `Year` field range
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self> {
        DateField::Year.check_valid_value(i64::from(value))?;
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Checks if this year is a leap year in the proleptic Gregorian calendar
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// Number of days in this year, 365 or 366
    pub const fn length(self) -> u16 {
        if self.is_leap() {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }

    /// Checks if the month-day forms a valid date in this year
    pub fn is_valid_month_day(self, month_day: &MonthDay) -> bool {
        month_day.is_valid_year(self.0)
    }

    /// Combines this year with a month-day, moving February 29th to the 28th in common years
    ///
    /// # Errors
    /// Never fails in practice since the year is already validated; the
    /// `Result` mirrors [`MonthDay::at_year`].
    pub fn at_month_day(self, month_day: &MonthDay) -> Result<LocalDate> {
        month_day.at_year(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = DateTimeError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

/// A month-of-year guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

const fn month_const(value: u8) -> Month {
    match NonZeroU8::new(value) {
        Some(non_zero) => Month(non_zero),
        None => panic!("month constant must be non-zero"),
    }
}

impl Month {
    pub const JANUARY: Self = month_const(1);
    pub const FEBRUARY: Self = month_const(2);
    pub const MARCH: Self = month_const(3);
    pub const APRIL: Self = month_const(4);
    pub const MAY: Self = month_const(5);
    pub const JUNE: Self = month_const(6);
    pub const JULY: Self = month_const(7);
    pub const AUGUST: Self = month_const(8);
    pub const SEPTEMBER: Self = month_const(9);
    pub const OCTOBER: Self = month_const(10);
    pub const NOVEMBER: Self = month_const(11);
    pub const DECEMBER: Self = month_const(12);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` for the `MonthOfYear` field if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self> {
        Self::of(i32::from(value))
    }

    /// Resolves a month number from a wider integer.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` for the `MonthOfYear` field if the value is outside 1..=12.
    pub fn of(value: i32) -> Result<Self> {
        let checked = DateField::MonthOfYear.check_valid_value(i64::from(value))?;
        u8::try_from(checked)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateTimeError::Range {
                field: DateField::MonthOfYear,
                value: checked,
                range: DateField::MonthOfYear.range(),
            })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Shortest length of this month in days (February: 28)
    pub const fn min_length(self) -> u8 {
        DAYS_IN_MONTH[self.0.get() as usize]
    }

    /// Longest length of this month in days (February: 29)
    pub const fn max_length(self) -> u8 {
        if self.0.get() == FEBRUARY {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.0.get() as usize]
        }
    }

    /// Length of this month in days for a leap or common year
    pub const fn length(self, leap_year: bool) -> u8 {
        if leap_year {
            self.max_length()
        } else {
            self.min_length()
        }
    }

    /// Day-of-year of the first day of this month (1-based)
    pub const fn first_day_of_year(self, leap_year: bool) -> u16 {
        let mut total: u16 = 1;
        let mut month = 1;
        while month < self.0.get() {
            total += DAYS_IN_MONTH[month as usize] as u16;
            if month == FEBRUARY && leap_year {
                total += 1;
            }
            month += 1;
        }
        total
    }
}

impl TryFrom<u8> for Month {
    type Error = DateTimeError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of the month in the given year.
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    month.length(is_leap_year(year))
}
