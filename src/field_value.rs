use serde::{Deserialize, Serialize};

use crate::{DateField, FieldBearing, Result, prelude::*};

/// A field paired with a raw value.
///
/// The value is not validated on construction, so intermediate values that
/// are out of range can still be represented. Validity is checked on demand
/// against the field's intrinsic range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{field} {value}")]
pub struct FieldValue {
    field: DateField,
    value: i64,
}

impl FieldValue {
    pub const fn of(field: DateField, value: i64) -> Self {
        Self { field, value }
    }

    pub const fn field(&self) -> DateField {
        self.field
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Returns a copy bound to another field, keeping the raw value.
    pub const fn with_field(&self, field: DateField) -> Self {
        Self::of(field, self.value)
    }

    /// Returns a copy with another raw value.
    pub const fn with_value(&self, value: i64) -> Self {
        Self::of(self.field, value)
    }

    pub fn is_valid_value(&self) -> bool {
        self.field.range().contains(self.value)
    }

    /// The value, if it lies in the field's intrinsic range.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` naming the field.
    pub fn valid_value(&self) -> Result<i64> {
        self.field.check_valid_value(self.value)
    }

    pub fn is_valid_int_value(&self) -> bool {
        self.field.range().is_valid_int_value(self.value)
    }

    /// The value narrowed to `i32`, if it lies in the field's intrinsic range.
    ///
    /// # Errors
    /// Returns `DateTimeError::Range` or `DateTimeError::Overflow` naming the field.
    pub fn valid_int_value(&self) -> Result<i32> {
        self.field.check_valid_int_value(self.value)
    }

    /// Checks if the temporal value supports the field and holds exactly this value.
    pub fn matches<T: FieldBearing + ?Sized>(&self, temporal: &T) -> bool {
        temporal.is_supported(self.field) && temporal.get_raw(self.field).is_ok_and(|value| value == self.value)
    }
}

impl From<(DateField, i64)> for FieldValue {
    fn from((field, value): (DateField, i64)) -> Self {
        Self::of(field, value)
    }
}
