use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::consts::{FEBRUARY, FEBRUARY_DAYS_COMMON, FEBRUARY_DAYS_LEAP, MONTH_DAY_PREFIX, MONTH_DAY_TAG};
use crate::types::is_leap_year;
use crate::{
    Adjustable, Adjuster, CalendarSystem, Clock, DateField, DateTimeError, FieldBearing, LocalDate, Month,
    MonthDayFormat, Result, TemporalKind, ValueRange,
};

/// A month-day in the ISO calendar system, such as `--12-03`.
///
/// No year is stored, so February 29th is accepted: it is valid in some
/// years. Whether it is valid in a particular year is answered separately
/// by [`MonthDay::is_valid_year`], and [`MonthDay::at_year`] resolves it.
///
/// Ordering compares the month first, then the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    month: Month,
    day:   u8,
}

impl MonthDay {
    /// Creates a month-day, accepting any day that can occur in the month in a leap year.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` for `DayOfMonth` if the day is outside
    /// `1..=month.max_length()`.
    pub fn new(month: Month, day: i32) -> Result<Self> {
        let day = i64::from(day);
        DateField::DayOfMonth.check_valid_value(day)?;
        let valid = ValueRange::fixed(1, i64::from(month.max_length()));
        valid.check_valid_value(day, DateField::DayOfMonth)?;
        let day = u8::try_from(day).map_err(|_| DateTimeError::Overflow {
            field: DateField::DayOfMonth,
            value: day,
        })?;
        Ok(Self { month, day })
    }

    /// Creates a month-day from a month number and day.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` for `MonthOfYear` if the month is
    /// outside 1..=12, or for `DayOfMonth` as in [`MonthDay::new`].
    pub fn of(month: i32, day: i32) -> Result<Self> {
        Self::new(Month::of(month)?, day)
    }

    /// Extracts the month-day from any field-bearing value.
    ///
    /// Values in other calendar systems are converted to a [`LocalDate`]
    /// through their epoch day first.
    ///
    /// # Errors
    /// Returns `DateTimeError::Conversion` naming the source type and
    /// wrapping the underlying cause.
    pub fn from<T: FieldBearing + ?Sized>(temporal: &T) -> Result<Self> {
        let extract = || {
            if temporal.calendar().is_iso() {
                Self::of(temporal.get(DateField::MonthOfYear)?, temporal.get(DateField::DayOfMonth)?)
            } else {
                let date = LocalDate::from(temporal)?;
                Self::new(date.month(), i32::from(date.day()))
            }
        };
        extract().map_err(|cause| {
            let source = temporal.type_name();
            tracing::debug!(source, %cause, "MonthDay conversion rejected");
            DateTimeError::conversion_caused_by(format!("Unable to obtain MonthDay from {source}"), cause)
        })
    }

    /// Obtains the current month-day from the clock.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the clock reports an invalid date.
    pub fn now(clock: &impl Clock) -> Result<Self> {
        let today = LocalDate::now(clock)?;
        Self::new(today.month(), i32::from(today.day()))
    }

    /// Parses the ISO form `--MM-DD`.
    ///
    /// # Errors
    /// Returns `DateTimeError::Parse` for malformed text or a month-day that
    /// cannot exist, such as `--04-31`.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &MonthDayFormat::iso())
    }

    /// Parses text with a compiled pattern.
    ///
    /// # Errors
    /// Returns `DateTimeError::Parse`; range failures are reported at index 0.
    pub fn parse_with(text: &str, format: &MonthDayFormat) -> Result<Self> {
        let (month, day) = format.parse(text)?;
        let invalid = |reason: String| DateTimeError::Parse {
            text: text.to_owned(),
            position: 0,
            reason,
        };
        let month = DateField::MonthOfYear
            .check_valid_int_value(month)
            .map_err(|err| invalid(err.to_string()))?;
        let day = DateField::DayOfMonth
            .check_valid_int_value(day)
            .map_err(|err| invalid(err.to_string()))?;
        Self::of(month, day).map_err(|err| invalid(err.to_string()))
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn month_value(&self) -> u8 {
        self.month.get()
    }

    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Checks if this month-day exists in the year.
    /// Only February 29th in a common year is invalid.
    pub const fn is_valid_year(&self, year: i32) -> bool {
        !(self.day == FEBRUARY_DAYS_LEAP && self.month.get() == FEBRUARY && !is_leap_year(year))
    }

    /// Returns a copy with the month altered.
    ///
    /// A day past the end of the new month is moved back to its last day,
    /// using leap-year lengths: `--01-31` becomes `--02-29`.
    pub fn with(&self, month: Month) -> Self {
        if month == self.month {
            return *self;
        }
        let day = self.day.min(month.max_length());
        if day != self.day {
            tracing::trace!(from = %self, month = month.get(), day, "clamped day-of-month to new month");
        }
        Self { month, day }
    }

    /// Returns a copy with the month number altered, see [`MonthDay::with`].
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` only if the month number is outside 1..=12.
    pub fn with_month(&self, month: i32) -> Result<Self> {
        Ok(self.with(Month::of(month)?))
    }

    /// Returns a copy with the day-of-month altered.
    /// Unlike [`MonthDay::with`] the day is never adjusted.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the day is invalid for the current month.
    pub fn with_day_of_month(&self, day: i32) -> Result<Self> {
        if i64::from(day) == i64::from(self.day) {
            return Ok(*self);
        }
        Self::new(self.month, day)
    }

    /// Combines this month-day with a year.
    ///
    /// February 29th becomes February 28th when the year is not a leap year;
    /// no error is raised for that case.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the year is outside the supported range.
    pub fn at_year(&self, year: i32) -> Result<LocalDate> {
        let day = if self.is_valid_year(year) {
            self.day
        } else {
            tracing::trace!(month_day = %self, year, "substituting February 28th in a common year");
            FEBRUARY_DAYS_COMMON
        };
        LocalDate::of(year, i32::from(self.month.get()), i32::from(day))
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Collision-free over all month-days: `(month << 6) + day`.
    pub const fn hash_code(&self) -> u32 {
        ((self.month.get() as u32) << 6) + self.day as u32
    }

    /// Formats with a compiled pattern.
    pub fn format(&self, format: &MonthDayFormat) -> String {
        format.format(self.month.get(), self.day)
    }

    /// The two single-byte fields written by a serialization envelope.
    pub const fn serialize_fields(&self) -> (u8, u8) {
        (self.month.get(), self.day)
    }

    /// Rebuilds a month-day from serialized fields, validating them again.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the bytes do not form a valid month-day.
    pub fn deserialize_fields(month: u8, day: u8) -> Result<Self> {
        Self::of(i32::from(month), i32::from(day))
    }

    /// Tagged three-byte form: `[MONTH_DAY_TAG, month, day]`.
    pub const fn to_bytes(&self) -> [u8; 3] {
        let (month, day) = self.serialize_fields();
        [MONTH_DAY_TAG, month, day]
    }

    /// Reads the tagged three-byte form.
    ///
    /// # Errors
    /// Returns `DateTimeError::Conversion` if the length or tag is wrong and
    /// `DateTimeError::Range` if the fields are invalid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [MONTH_DAY_TAG, month, day] => Self::deserialize_fields(*month, *day),
            [tag, _, _] => Err(DateTimeError::conversion(format!(
                "Unexpected type tag {tag}, expected {MONTH_DAY_TAG}"
            ))),
            _ => Err(DateTimeError::conversion(format!(
                "Expected 3 bytes for MonthDay, found {}",
                bytes.len()
            ))),
        }
    }
}

impl Hash for MonthDay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl FieldBearing for MonthDay {
    fn is_supported(&self, field: DateField) -> bool {
        field.is_supported_by(TemporalKind::MonthDay)
    }

    fn range(&self, field: DateField) -> Result<ValueRange> {
        match field {
            DateField::MonthOfYear => Ok(field.range()),
            DateField::DayOfMonth => Ok(ValueRange::variable(
                1,
                i64::from(self.month.min_length()),
                i64::from(self.month.max_length()),
            )),
            _ => Err(DateTimeError::UnsupportedField { field }),
        }
    }

    fn get_raw(&self, field: DateField) -> Result<i64> {
        // Week and year based fields cannot be set consistently without a year
        match field {
            DateField::MonthOfYear => Ok(i64::from(self.month.get())),
            DateField::DayOfMonth => Ok(i64::from(self.day)),
            _ => Err(DateTimeError::UnsupportedField { field }),
        }
    }

    fn calendar(&self) -> CalendarSystem {
        CalendarSystem::Iso
    }
}

impl Adjuster for MonthDay {
    /// Sets the month, then the day clamped to the target's own day-of-month range.
    fn adjust_into<T: Adjustable>(&self, target: &T) -> Result<T> {
        let calendar = target.calendar();
        if !calendar.is_iso() {
            tracing::debug!(%calendar, month_day = %self, "adjustment rejected for non-ISO target");
            return Err(DateTimeError::conversion(format!(
                "Adjustment only supported on ISO date-time, found {calendar}"
            )));
        }
        let adjusted = target.with_field(DateField::MonthOfYear, i64::from(self.month.get()))?;
        let maximum = adjusted.range(DateField::DayOfMonth)?.maximum();
        adjusted.with_field(DateField::DayOfMonth, maximum.min(i64::from(self.day)))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MONTH_DAY_PREFIX}{:02}-{:02}", self.month.get(), self.day)
    }
}

impl FromStr for MonthDay {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl serde::Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
