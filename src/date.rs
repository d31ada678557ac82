use std::fmt;
use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, DAYS_0000_TO_1970, DAYS_PER_CYCLE, DAYS_PER_WEEK, FEBRUARY};
use crate::types::days_in_month;
use crate::{
    Adjustable, CalendarSystem, Clock, DateField, DateTimeError, FieldBearing, Month, Result, TemporalKind,
    ValueRange, Year,
};

/// A full date in the ISO calendar system, such as `2007-12-03`.
///
/// Always valid: the day never exceeds the month's length in the held year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate {
    year:  Year,
    month: Month,
    day:   u8,
}

impl LocalDate {
    /// Creates a date from year, month and day-of-month.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if any field is out of range or the
    /// day does not exist in that month and year.
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self> {
        let year = Year::new(year)?;
        let month = Month::of(month)?;
        let day = DateField::DayOfMonth.check_valid_value(i64::from(day))?;
        Self::create(year, month, day)
    }

    /// Creates a date from a year and day-of-year.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the year is out of range or the day
    /// does not exist in that year.
    pub fn of_year_day(year: i32, day_of_year: i32) -> Result<Self> {
        let year = Year::new(year)?;
        let day_of_year = DateField::DayOfYear.check_valid_value(i64::from(day_of_year))?;
        let valid = ValueRange::fixed(1, i64::from(year.length()));
        valid.check_valid_value(day_of_year, DateField::DayOfYear)?;

        let leap = year.is_leap();
        let mut month = Month::JANUARY;
        for value in 2..=12 {
            let next = Month::new(value)?;
            if i64::from(next.first_day_of_year(leap)) > day_of_year {
                break;
            }
            month = next;
        }
        let day = day_of_year - i64::from(month.first_day_of_year(leap)) + 1;
        Self::create(year, month, day)
    }

    /// Creates a date from the number of days since `1970-01-01`.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the epoch day is outside the supported range.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self> {
        DateField::EpochDay.check_valid_value(epoch_day)?;
        let (year, month, day) = civil_from_epoch_day(epoch_day);
        let year = DateField::Year.check_valid_int_value(year)?;
        Self::of(year, month, day)
    }

    /// Obtains the date from any field-bearing value exposing `EpochDay`.
    ///
    /// # Errors
    /// Returns `DateTimeError::Conversion` wrapping the cause if the source
    /// has no usable epoch day.
    pub fn from<T: FieldBearing + ?Sized>(temporal: &T) -> Result<Self> {
        temporal
            .get_raw(DateField::EpochDay)
            .and_then(Self::from_epoch_day)
            .map_err(|cause| {
                let source = temporal.type_name();
                tracing::debug!(source, %cause, "LocalDate conversion rejected");
                DateTimeError::conversion_caused_by(format!("Unable to obtain LocalDate from {source}"), cause)
            })
    }

    /// Obtains the current date from the clock.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the clock reports an invalid date.
    pub fn now(clock: &impl Clock) -> Result<Self> {
        let (year, month, day) = clock.now();
        let year = DateField::Year.check_valid_int_value(year)?;
        let month = DateField::MonthOfYear.check_valid_int_value(month)?;
        let day = DateField::DayOfMonth.check_valid_int_value(day)?;
        Self::of(year, month, day)
    }

    fn create(year: Year, month: Month, day: i64) -> Result<Self> {
        let length = days_in_month(year.get(), month);
        ValueRange::fixed(1, i64::from(length)).check_valid_value(day, DateField::DayOfMonth)?;
        let day = u8::try_from(day).map_err(|_| DateTimeError::Overflow {
            field: DateField::DayOfMonth,
            value: day,
        })?;
        Ok(Self { year, month, day })
    }

    /// Builds a date, moving the day back to the last valid day of the month.
    fn resolve_previous_valid(year: Year, month: Month, day: u8) -> Self {
        let day = day.min(days_in_month(year.get(), month));
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn month_value(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub const fn length_of_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month)
    }

    pub const fn length_of_year(&self) -> u16 {
        self.year.length()
    }

    /// Day-of-year, from 1 to 365 or 366
    pub const fn day_of_year(&self) -> u16 {
        self.month.first_day_of_year(self.is_leap_year()) + self.day as u16 - 1
    }

    /// Day-of-week, from 1 (Monday) to 7 (Sunday)
    pub const fn day_of_week(&self) -> u8 {
        // 1970-01-01 was a Thursday
        ((self.to_epoch_day() + 3).rem_euclid(DAYS_PER_WEEK) + 1) as u8
    }

    /// Number of days since `1970-01-01`.
    pub const fn to_epoch_day(&self) -> i64 {
        let y = self.year.get() as i64;
        let m = self.month.get() as i64;
        let mut total = 365 * y;
        if y >= 0 {
            total += (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400;
        } else {
            total -= y / -4 - y / -100 + y / -400;
        }
        total += (367 * m - 362) / 12;
        total += self.day as i64 - 1;
        if m > FEBRUARY as i64 {
            total -= 1;
            if !self.is_leap_year() {
                total -= 1;
            }
        }
        total - DAYS_0000_TO_1970
    }

    const fn aligned_week_of_month(&self) -> u8 {
        (self.day - 1) / 7 + 1
    }

    /// Returns a copy with the number of days added.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the result falls outside the supported
    /// years, or `DateTimeError::Overflow` if the day count cannot be added.
    pub fn plus_days(&self, days: i64) -> Result<Self> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self.to_epoch_day().checked_add(days).ok_or(DateTimeError::Overflow {
            field: DateField::EpochDay,
            value: days,
        })?;
        Self::from_epoch_day(epoch_day)
    }

    /// Returns a copy with the number of weeks added.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the result falls outside the supported years.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self> {
        let days = weeks.checked_mul(DAYS_PER_WEEK).ok_or(DateTimeError::Overflow {
            field: DateField::EpochDay,
            value: weeks,
        })?;
        self.plus_days(days)
    }

    /// Returns a copy with the year altered, clamping February 29th to the 28th.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the year is out of range.
    pub fn with_year(&self, year: i32) -> Result<Self> {
        Ok(Self::resolve_previous_valid(Year::new(year)?, self.month, self.day))
    }

    /// Returns a copy with the month altered, clamping the day to the month's last day.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the month is out of range.
    pub fn with_month(&self, month: i32) -> Result<Self> {
        Ok(Self::resolve_previous_valid(self.year, Month::of(month)?, self.day))
    }

    /// Returns a copy with the day-of-month altered.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the day does not exist in this month.
    pub fn with_day_of_month(&self, day: i32) -> Result<Self> {
        if i64::from(day) == i64::from(self.day) {
            return Ok(*self);
        }
        Self::of(self.year.get(), i32::from(self.month.get()), day)
    }

    /// Returns a copy with the day-of-year altered.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the day does not exist in this year.
    pub fn with_day_of_year(&self, day_of_year: i32) -> Result<Self> {
        Self::of_year_day(self.year.get(), day_of_year)
    }
}

/// Converts an epoch day into `(year, month, day)` without range checks.
pub(crate) const fn civil_from_epoch_day(epoch_day: i64) -> (i64, i32, i32) {
    let mut zero_day = epoch_day + DAYS_0000_TO_1970;
    // shift to a March-based year so the leap day is last
    zero_day -= 60;
    let mut adjust = 0;
    if zero_day < 0 {
        let adjust_cycles = (zero_day + 1) / DAYS_PER_CYCLE - 1;
        adjust = adjust_cycles * 400;
        zero_day += -adjust_cycles * DAYS_PER_CYCLE;
    }
    let mut year_est = (400 * zero_day + 591) / DAYS_PER_CYCLE;
    let mut doy_est = zero_day - (365 * year_est + year_est / 4 - year_est / 100 + year_est / 400);
    if doy_est < 0 {
        year_est -= 1;
        doy_est = zero_day - (365 * year_est + year_est / 4 - year_est / 100 + year_est / 400);
    }
    year_est += adjust;
    let march_doy0 = doy_est;
    let march_month0 = (march_doy0 * 5 + 2) / 153;
    let month = (march_month0 + 2) % 12 + 1;
    let day = march_doy0 - (march_month0 * 306 + 5) / 10 + 1;
    year_est += march_month0 / 10;
    (year_est, month as i32, day as i32)
}

impl FieldBearing for LocalDate {
    fn is_supported(&self, field: DateField) -> bool {
        field.is_supported_by(TemporalKind::LocalDate)
    }

    fn range(&self, field: DateField) -> Result<ValueRange> {
        if !self.is_supported(field) {
            return Err(DateTimeError::UnsupportedField { field });
        }
        Ok(match field {
            DateField::DayOfMonth => ValueRange::fixed(1, i64::from(self.length_of_month())),
            DateField::DayOfYear => ValueRange::fixed(1, i64::from(self.length_of_year())),
            DateField::AlignedWeekOfMonth => {
                let weeks = if self.month == Month::FEBRUARY && !self.is_leap_year() {
                    4
                } else {
                    5
                };
                ValueRange::fixed(1, weeks)
            },
            DateField::DayOfWeek | DateField::EpochDay | DateField::MonthOfYear | DateField::Year => field.range(),
        })
    }

    fn get_raw(&self, field: DateField) -> Result<i64> {
        Ok(match field {
            DateField::DayOfWeek => i64::from(self.day_of_week()),
            DateField::DayOfMonth => i64::from(self.day),
            DateField::DayOfYear => i64::from(self.day_of_year()),
            DateField::EpochDay => self.to_epoch_day(),
            DateField::AlignedWeekOfMonth => i64::from(self.aligned_week_of_month()),
            DateField::MonthOfYear => i64::from(self.month.get()),
            DateField::Year => i64::from(self.year.get()),
        })
    }

    fn calendar(&self) -> CalendarSystem {
        CalendarSystem::Iso
    }
}

impl Adjustable for LocalDate {
    fn with_field(&self, field: DateField, value: i64) -> Result<Self> {
        let value = field.check_valid_value(value)?;
        match field {
            DateField::DayOfWeek => self.plus_days(value - i64::from(self.day_of_week())),
            DateField::DayOfMonth => self.with_day_of_month(field.check_valid_int_value(value)?),
            DateField::DayOfYear => self.with_day_of_year(field.check_valid_int_value(value)?),
            DateField::EpochDay => Self::from_epoch_day(value),
            DateField::AlignedWeekOfMonth => self.plus_weeks(value - i64::from(self.aligned_week_of_month())),
            DateField::MonthOfYear => self.with_month(field.check_valid_int_value(value)?),
            DateField::Year => self.with_year(field.check_valid_int_value(value)?),
        }
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.get();
        if year.unsigned_abs() < 1000 {
            if year < 0 {
                write!(f, "-{:04}", year.unsigned_abs())?;
            } else {
                write!(f, "{year:04}")?;
            }
        } else if year > 9999 {
            write!(f, "+{year}")?;
        } else {
            write!(f, "{year}")?;
        }
        write!(f, "-{:02}-{:02}", self.month.get(), self.day)
    }
}

impl FromStr for LocalDate {
    type Err = DateTimeError;

    /// Parses `[+-]YYYY-MM-DD`, with at least four year digits.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |position: usize, reason: &str| DateTimeError::Parse {
            text: s.to_owned(),
            position,
            reason: reason.to_owned(),
        };

        let (negative, offset) = match s.as_bytes().first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            Some(_) => (false, 0),
            None => return Err(invalid(0, "empty date string")),
        };
        let parts: Vec<&str> = s[offset..].split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid(offset, "expected YYYY-MM-DD"));
        };

        let month_start = offset + year.len() + 1;
        let day_start = month_start + month.len() + 1;
        let year_valid = year.len() >= 4 && year.bytes().all(|b| b.is_ascii_digit());
        if !year_valid {
            return Err(invalid(offset, "expected at least four year digits"));
        }
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(month_start, "expected two month digits"));
        }
        if day.len() != 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(day_start, "expected two day digits"));
        }

        let to_number = |digits: &str, position: usize| {
            digits
                .parse::<i32>()
                .map_err(|_| invalid(position, "number out of range"))
        };
        let year = to_number(year, offset)?;
        let year = if negative { -year } else { year };
        let month = to_number(month, month_start)?;
        let day = to_number(day, day_start)?;

        Self::of(year, month, day).map_err(|err| invalid(0, &err.to_string()))
    }
}

impl serde::Serialize for LocalDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
