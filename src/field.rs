//! Registry of the date fields understood by this crate.
//!
//! Each [`DateField`] maps to a single [`FieldDefinition`] in a static,
//! read-only table. The table records the field's stable name, its intrinsic
//! range and the composite types that declare support for it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FEBRUARY_DAYS_COMMON, MAX_DAY, MAX_EPOCH_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_EPOCH_DAY, MIN_MONTH, MIN_YEAR,
};
use crate::{DateTimeError, Result, ValueRange, prelude::*};

/// Identifier of a date field.
///
/// Variants are declared in unit order: fields measured in days come
/// before weeks, months and years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum DateField {
    #[display(fmt = "DayOfWeek")]
    DayOfWeek,
    #[display(fmt = "DayOfMonth")]
    DayOfMonth,
    #[display(fmt = "DayOfYear")]
    DayOfYear,
    #[display(fmt = "EpochDay")]
    EpochDay,
    #[display(fmt = "AlignedWeekOfMonth")]
    AlignedWeekOfMonth,
    #[display(fmt = "MonthOfYear")]
    MonthOfYear,
    #[display(fmt = "Year")]
    Year,
}

/// Composite temporal types that can declare support for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    MonthDay,
    LocalDate,
}

/// Static description of a date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    field:        DateField,
    name:         &'static str,
    range:        ValueRange,
    supported_by: &'static [TemporalKind],
}

const BOTH: &[TemporalKind] = &[TemporalKind::MonthDay, TemporalKind::LocalDate];
const DATE_ONLY: &[TemporalKind] = &[TemporalKind::LocalDate];

/// Indexed by `DateField as usize`.
static REGISTRY: [FieldDefinition; DateField::ALL.len()] = [
    FieldDefinition {
        field:        DateField::DayOfWeek,
        name:         "DayOfWeek",
        range:        ValueRange::fixed(1, 7),
        supported_by: DATE_ONLY,
    },
    FieldDefinition {
        field:        DateField::DayOfMonth,
        name:         "DayOfMonth",
        range:        ValueRange::variable(MIN_DAY as i64, FEBRUARY_DAYS_COMMON as i64, MAX_DAY as i64),
        supported_by: BOTH,
    },
    FieldDefinition {
        field:        DateField::DayOfYear,
        name:         "DayOfYear",
        range:        ValueRange::variable(1, 365, 366),
        supported_by: DATE_ONLY,
    },
    FieldDefinition {
        field:        DateField::EpochDay,
        name:         "EpochDay",
        range:        ValueRange::fixed(MIN_EPOCH_DAY, MAX_EPOCH_DAY),
        supported_by: DATE_ONLY,
    },
    FieldDefinition {
        field:        DateField::AlignedWeekOfMonth,
        name:         "AlignedWeekOfMonth",
        range:        ValueRange::variable(1, 4, 5),
        supported_by: DATE_ONLY,
    },
    FieldDefinition {
        field:        DateField::MonthOfYear,
        name:         "MonthOfYear",
        range:        ValueRange::fixed(MIN_MONTH as i64, MAX_MONTH as i64),
        supported_by: BOTH,
    },
    FieldDefinition {
        field:        DateField::Year,
        name:         "Year",
        range:        ValueRange::fixed(MIN_YEAR as i64, MAX_YEAR as i64),
        supported_by: DATE_ONLY,
    },
];

impl DateField {
    /// Every registered field, in unit order.
    pub const ALL: [Self; 7] = [
        Self::DayOfWeek,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::EpochDay,
        Self::AlignedWeekOfMonth,
        Self::MonthOfYear,
        Self::Year,
    ];

    /// Looks up the static definition of this field.
    pub fn definition(self) -> &'static FieldDefinition {
        &REGISTRY[self as usize]
    }

    /// Stable name of the field.
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Intrinsic range, independent of any other field.
    pub fn range(self) -> ValueRange {
        self.definition().range
    }

    /// Checks the value against the intrinsic range.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` if the value is outside the intrinsic range.
    pub fn check_valid_value(self, value: i64) -> Result<i64> {
        self.range().check_valid_value(value, self)
    }

    /// Checks the value against the intrinsic range and narrows it to `i32`.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` or `DateTimeError::Overflow`.
    pub fn check_valid_int_value(self, value: i64) -> Result<i32> {
        self.range().check_valid_int_value(value, self)
    }

    /// True if the composite type declares support for this field.
    pub fn is_supported_by(self, kind: TemporalKind) -> bool {
        self.definition().supported_by.contains(&kind)
    }
}

impl FieldDefinition {
    pub const fn field(&self) -> DateField {
        self.field
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn range(&self) -> ValueRange {
        self.range
    }

    pub const fn supported_by(&self) -> &'static [TemporalKind] {
        self.supported_by
    }
}

impl FromStr for DateField {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        REGISTRY
            .iter()
            .find(|definition| definition.name.eq_ignore_ascii_case(name))
            .map(|definition| definition.field)
            .ok_or_else(|| DateTimeError::Parse {
                text:     s.to_owned(),
                position: 0,
                reason:   "unknown field name".to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_indexed_by_field() {
        for field in DateField::ALL {
            assert_eq!(field.definition().field(), field, "Registry slot for {field} is misplaced");
        }
    }

    #[test]
    fn test_names_match_display() {
        for field in DateField::ALL {
            assert_eq!(field.name(), field.to_string());
        }
    }

    #[test]
    fn test_intrinsic_ranges() {
        assert_eq!(DateField::MonthOfYear.range(), ValueRange::fixed(1, 12));
        assert_eq!(DateField::DayOfMonth.range(), ValueRange::variable(1, 28, 31));
        assert_eq!(DateField::DayOfMonth.range().minimum(), i64::from(MIN_DAY));
        assert_eq!(DateField::DayOfMonth.range().largest_maximum(), i64::from(MAX_DAY));
        assert_eq!(DateField::DayOfYear.range().to_string(), "1 - 365/366");
        assert_eq!(DateField::Year.range().minimum(), -999_999_999);
    }

    #[test]
    fn test_month_day_support() {
        let supported: Vec<DateField> = DateField::ALL
            .into_iter()
            .filter(|field| field.is_supported_by(TemporalKind::MonthDay))
            .collect();
        assert_eq!(supported, vec![DateField::DayOfMonth, DateField::MonthOfYear]);

        for field in DateField::ALL {
            assert!(field.is_supported_by(TemporalKind::LocalDate), "{field} missing on LocalDate");
        }
    }

    #[test]
    fn test_check_valid_value() {
        assert_eq!(DateField::MonthOfYear.check_valid_value(12), Ok(12));
        assert!(matches!(
            DateField::MonthOfYear.check_valid_value(13),
            Err(DateTimeError::Range {
                field: DateField::MonthOfYear,
                value: 13,
                ..
            })
        ));
        assert!(matches!(
            DateField::EpochDay.check_valid_int_value(i64::from(i32::MAX) + 1),
            Err(DateTimeError::Overflow { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MonthOfYear".parse::<DateField>(), Ok(DateField::MonthOfYear));
        assert_eq!(" dayofmonth ".parse::<DateField>(), Ok(DateField::DayOfMonth));
        assert!("QuarterOfYear".parse::<DateField>().is_err());
    }

    #[test]
    fn test_unit_order() {
        assert!(DateField::DayOfMonth < DateField::MonthOfYear);
        assert!(DateField::MonthOfYear < DateField::Year);
    }
}
