use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DateField, DateTimeError, Result};

/// The inclusive range of valid values for a date field.
///
/// The maximum may vary with context: day-of-month has a smallest maximum of
/// 28 and a largest maximum of 31. When both maxima are equal the range is
/// fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawValueRange", into = "RawValueRange")]
pub struct ValueRange {
    minimum:          i64,
    smallest_maximum: i64,
    largest_maximum:  i64,
}

/// Unvalidated serde form of [`ValueRange`].
#[derive(Serialize, Deserialize)]
struct RawValueRange {
    minimum:          i64,
    smallest_maximum: i64,
    largest_maximum:  i64,
}

impl ValueRange {
    /// Builds a fixed range without checking the bounds.
    pub(crate) const fn fixed(minimum: i64, maximum: i64) -> Self {
        Self::variable(minimum, maximum, maximum)
    }

    /// Builds a variable range without checking the bounds.
    pub(crate) const fn variable(minimum: i64, smallest_maximum: i64, largest_maximum: i64) -> Self {
        Self {
            minimum,
            smallest_maximum,
            largest_maximum,
        }
    }

    /// Creates a fixed range `minimum..=maximum`.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidRange` if `minimum > maximum`.
    pub fn of(minimum: i64, maximum: i64) -> Result<Self> {
        Self::of_variable(minimum, maximum, maximum)
    }

    /// Creates a range whose maximum lies between `smallest_maximum` and `largest_maximum`.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidRange` unless
    /// `minimum <= smallest_maximum <= largest_maximum`.
    pub fn of_variable(minimum: i64, smallest_maximum: i64, largest_maximum: i64) -> Result<Self> {
        if minimum > smallest_maximum || smallest_maximum > largest_maximum {
            return Err(DateTimeError::InvalidRange {
                minimum,
                smallest_maximum,
                largest_maximum,
            });
        }
        Ok(Self::variable(minimum, smallest_maximum, largest_maximum))
    }

    pub const fn minimum(&self) -> i64 {
        self.minimum
    }

    pub const fn smallest_maximum(&self) -> i64 {
        self.smallest_maximum
    }

    pub const fn largest_maximum(&self) -> i64 {
        self.largest_maximum
    }

    /// The upper bound used for validation, same as [`Self::largest_maximum`].
    pub const fn maximum(&self) -> i64 {
        self.largest_maximum
    }

    /// True when the maximum does not vary.
    pub const fn is_fixed(&self) -> bool {
        self.smallest_maximum == self.largest_maximum
    }

    /// Checks if the value lies within `minimum..=largest_maximum`.
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.minimum && value <= self.largest_maximum
    }

    /// True when every value in the range fits in an `i32`.
    pub const fn is_int_value(&self) -> bool {
        self.minimum >= i32::MIN as i64 && self.largest_maximum <= i32::MAX as i64
    }

    /// Checks if the value is in range and the range itself fits in an `i32`.
    pub const fn is_valid_int_value(&self, value: i64) -> bool {
        self.is_int_value() && self.contains(value)
    }

    /// Clamps the value into `minimum..=largest_maximum`.
    pub const fn clamp(&self, value: i64) -> i64 {
        if value < self.minimum {
            self.minimum
        } else if value > self.largest_maximum {
            self.largest_maximum
        } else {
            value
        }
    }

    /// Returns the value if it lies within the range.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` naming `field` if the value is outside.
    pub fn check_valid_value(&self, value: i64, field: DateField) -> Result<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(DateTimeError::Range {
                field,
                value,
                range: *self,
            })
        }
    }

    /// Returns the value narrowed to `i32` if it lies within the range.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the value is outside the range and
    /// `DateTimeError::Overflow` if it does not fit in an `i32`.
    pub fn check_valid_int_value(&self, value: i64, field: DateField) -> Result<i32> {
        let value = self.check_valid_value(value, field)?;
        i32::try_from(value).map_err(|_| DateTimeError::Overflow { field, value })
    }
}

impl TryFrom<RawValueRange> for ValueRange {
    type Error = DateTimeError;

    fn try_from(raw: RawValueRange) -> Result<Self> {
        Self::of_variable(raw.minimum, raw.smallest_maximum, raw.largest_maximum)
    }
}

impl From<ValueRange> for RawValueRange {
    fn from(range: ValueRange) -> Self {
        Self {
            minimum:          range.minimum,
            smallest_maximum: range.smallest_maximum,
            largest_maximum:  range.largest_maximum,
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.minimum, self.smallest_maximum)?;
        if !self.is_fixed() {
            write!(f, "/{}", self.largest_maximum)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            minimum:          i64,
            smallest_maximum: i64,
            largest_maximum:  i64,
            should_succeed:   bool,
            description:      &'static str,
        }

        let cases = [
            TestCase {
                minimum:          1,
                smallest_maximum: 12,
                largest_maximum:  12,
                should_succeed:   true,
                description:      "fixed range",
            },
            TestCase {
                minimum:          1,
                smallest_maximum: 28,
                largest_maximum:  31,
                should_succeed:   true,
                description:      "variable range",
            },
            TestCase {
                minimum:          5,
                smallest_maximum: 5,
                largest_maximum:  5,
                should_succeed:   true,
                description:      "single value",
            },
            TestCase {
                minimum:          13,
                smallest_maximum: 12,
                largest_maximum:  12,
                should_succeed:   false,
                description:      "minimum above maximum",
            },
            TestCase {
                minimum:          1,
                smallest_maximum: 31,
                largest_maximum:  28,
                should_succeed:   false,
                description:      "smallest maximum above largest maximum",
            },
        ];

        for case in &cases {
            let range = ValueRange::of_variable(case.minimum, case.smallest_maximum, case.largest_maximum);
            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(range, Err(DateTimeError::InvalidRange { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_accessors() {
        let range = ValueRange::of_variable(1, 28, 31).expect("failed to construct day-of-month range");
        assert_eq!(range.minimum(), 1);
        assert_eq!(range.smallest_maximum(), 28);
        assert_eq!(range.largest_maximum(), 31);
        assert_eq!(range.maximum(), 31);
        assert!(!range.is_fixed());

        let range = ValueRange::of(1, 12).expect("failed to construct month range");
        assert!(range.is_fixed());
        assert_eq!(range.maximum(), 12);
    }

    #[test]
    fn test_contains() {
        let range = ValueRange::fixed(1, 12);
        assert!(range.contains(1));
        assert!(range.contains(12));
        assert!(!range.contains(0));
        assert!(!range.contains(13));
        assert!(!range.contains(-1));

        // Validation uses the largest maximum
        let range = ValueRange::variable(1, 28, 31);
        assert!(range.contains(31));
        assert!(!range.contains(32));
    }

    #[test]
    fn test_clamp() {
        let range = ValueRange::fixed(1, 29);
        assert_eq!(range.clamp(31), 29);
        assert_eq!(range.clamp(0), 1);
        assert_eq!(range.clamp(15), 15);
    }

    #[test]
    fn test_check_valid_value() {
        let range = ValueRange::fixed(1, 30);
        assert_eq!(range.check_valid_value(30, DateField::DayOfMonth), Ok(30));

        let err = range
            .check_valid_value(31, DateField::DayOfMonth)
            .expect_err("31 should be outside 1 - 30");
        assert_eq!(
            err,
            DateTimeError::Range {
                field: DateField::DayOfMonth,
                value: 31,
                range,
            }
        );
    }

    #[test]
    fn test_check_valid_int_value_overflow() {
        let range = ValueRange::fixed(0, i64::from(i32::MAX) + 10);
        assert!(!range.is_int_value());
        assert!(!range.is_valid_int_value(5));
        assert_eq!(range.check_valid_int_value(5, DateField::EpochDay), Ok(5));

        let big = i64::from(i32::MAX) + 1;
        let err = range
            .check_valid_int_value(big, DateField::EpochDay)
            .expect_err("value beyond i32 should overflow");
        assert_eq!(
            err,
            DateTimeError::Overflow {
                field: DateField::EpochDay,
                value: big,
            }
        );

        // Out-of-range is reported before overflow
        let err = range
            .check_valid_int_value(-1, DateField::EpochDay)
            .expect_err("negative value should be out of range");
        assert!(matches!(err, DateTimeError::Range { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueRange::fixed(1, 12).to_string(), "1 - 12");
        assert_eq!(ValueRange::variable(1, 28, 31).to_string(), "1 - 28/31");
    }

    #[test]
    fn test_serde_validation() {
        let range = ValueRange::variable(1, 28, 31);
        let json = serde_json::to_string(&range).expect("failed to serialize range");
        assert_eq!(json, r#"{"minimum":1,"smallest_maximum":28,"largest_maximum":31}"#);
        let parsed: ValueRange = serde_json::from_str(&json).expect("failed to deserialize range");
        assert_eq!(range, parsed);

        let json = r#"{"minimum":5,"smallest_maximum":1,"largest_maximum":1}"#;
        let result: std::result::Result<ValueRange, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
