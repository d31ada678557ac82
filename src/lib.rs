//! Recurring annual dates in the ISO calendar.
//!
//! [`MonthDay`] holds a month and a day-of-month without a year, so
//! February 29th is representable and only checked against a year when one
//! is supplied. It takes part in a small field protocol: it can be read
//! field by field through [`FieldBearing`], extracted from any other
//! field-bearing value and pushed onto an [`Adjustable`] date.
//!
//! ```
//! use month_day::MonthDay;
//!
//! let leap_day: MonthDay = "--02-29".parse().unwrap();
//! assert!(!leap_day.is_valid_year(2023));
//! assert_eq!(leap_day.at_year(2023).unwrap().to_string(), "2023-02-28");
//! ```

mod clock;
mod consts;
mod date;
mod error;
mod field;
mod field_value;
mod format;
mod month_day;
mod prelude;
mod range;
mod temporal;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date::LocalDate;
pub use error::{DateTimeError, Result};
pub use field::{DateField, FieldDefinition, TemporalKind};
pub use field_value::FieldValue;
pub use format::MonthDayFormat;
pub use month_day::MonthDay;
pub use range::ValueRange;
pub use temporal::{
    Adjustable, Adjuster, CalendarQuery, CalendarSystem, DateLike, ExternalDate, FieldBearing, FieldQuery,
    LocalDateQuery, MonthDayQuery, TemporalQuery,
};
pub use types::{Month, Year, days_in_month, is_leap_year};
