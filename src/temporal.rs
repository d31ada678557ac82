//! Field protocol shared by every date-like value.
//!
//! [`FieldBearing`] answers field questions, [`Adjustable`] produces copies
//! with one field replaced, [`Adjuster`] pushes fields onto an adjustable
//! target and [`TemporalQuery`] pulls a derived answer out of any
//! field-bearing value.

use serde::{Deserialize, Serialize};

use crate::{DateField, DateTimeError, FieldValue, LocalDate, MonthDay, Result, ValueRange, prelude::*};

/// Calendar system a date-like value is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CalendarSystem {
    /// ISO 8601, the proleptic Gregorian calendar
    #[display(fmt = "ISO")]
    Iso,
    /// A calendar provided by an external collaborator, identified by name
    #[display(fmt = "{_0}")]
    Other(String),
}

impl CalendarSystem {
    pub const fn is_iso(&self) -> bool {
        matches!(self, Self::Iso)
    }
}

/// Read access to the fields of a date-like value.
pub trait FieldBearing {
    /// Checks if the field can be queried on this value.
    fn is_supported(&self, field: DateField) -> bool;

    /// Valid range of the field, refined by this value's other fields.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field is not supported.
    fn range(&self, field: DateField) -> Result<ValueRange> {
        if self.is_supported(field) {
            Ok(field.range())
        } else {
            Err(DateTimeError::UnsupportedField { field })
        }
    }

    /// Value of the field, guaranteed to lie within [`Self::range`].
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField`, `DateTimeError::Range` or
    /// `DateTimeError::Overflow`.
    fn get(&self, field: DateField) -> Result<i32> {
        let value = self.get_raw(field)?;
        self.range(field)?.check_valid_int_value(value, field)
    }

    /// Value of the field without the range guarantee.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field is not supported.
    fn get_raw(&self, field: DateField) -> Result<i64>;

    /// Calendar system of this value.
    fn calendar(&self) -> CalendarSystem;

    /// Name of the concrete type behind this value, also through `dyn FieldBearing`.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Runs the query against this value.
    fn query<Q: TemporalQuery>(&self, query: &Q) -> Q::Output
    where
        Self: Sized,
    {
        query.query_from(self)
    }
}

/// A date-like value that can produce copies with a field replaced.
pub trait Adjustable: FieldBearing + Sized {
    /// Returns a copy with the field set to `value`.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` or `DateTimeError::Range`
    /// depending on the implementation's rules for the field.
    fn with_field(&self, field: DateField, value: i64) -> Result<Self>;

    /// Returns a copy adjusted by the adjuster.
    ///
    /// # Errors
    /// Propagates the adjuster's error.
    fn with<A: Adjuster + ?Sized>(&self, adjuster: &A) -> Result<Self> {
        adjuster.adjust_into(self)
    }
}

/// Strategy that copies its own fields onto an adjustable target.
pub trait Adjuster {
    /// Returns a copy of `target` carrying this adjuster's fields.
    ///
    /// # Errors
    /// Implementation defined.
    fn adjust_into<T: Adjustable>(&self, target: &T) -> Result<T>;
}

/// Strategy that extracts a derived answer from a field-bearing value.
pub trait TemporalQuery {
    type Output;

    fn query_from<T: FieldBearing + ?Sized>(&self, temporal: &T) -> Self::Output;
}

/// Answers the calendar system of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarQuery;

impl TemporalQuery for CalendarQuery {
    type Output = CalendarSystem;

    fn query_from<T: FieldBearing + ?Sized>(&self, temporal: &T) -> CalendarSystem {
        temporal.calendar()
    }
}

/// Answers the raw value of a field, or `None` if unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldQuery(pub DateField);

impl TemporalQuery for FieldQuery {
    type Output = Option<i64>;

    fn query_from<T: FieldBearing + ?Sized>(&self, temporal: &T) -> Option<i64> {
        if temporal.is_supported(self.0) {
            temporal.get_raw(self.0).ok()
        } else {
            None
        }
    }
}

/// Extracts a [`MonthDay`], see [`MonthDay::from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthDayQuery;

impl TemporalQuery for MonthDayQuery {
    type Output = Result<MonthDay>;

    fn query_from<T: FieldBearing + ?Sized>(&self, temporal: &T) -> Result<MonthDay> {
        MonthDay::from(temporal)
    }
}

/// Extracts a [`LocalDate`], see [`LocalDate::from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalDateQuery;

impl TemporalQuery for LocalDateQuery {
    type Output = Result<LocalDate>;

    fn query_from<T: FieldBearing + ?Sized>(&self, temporal: &T) -> Result<LocalDate> {
        LocalDate::from(temporal)
    }
}

/// A date produced by an external calendar collaborator.
///
/// The crate does not know the calendar's rules. It only carries the field
/// values the collaborator exposed, validated against their intrinsic ranges
/// on demand. Supplying `EpochDay` makes the value convertible to ISO.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalDate {
    calendar: CalendarSystem,
    fields:   Vec<FieldValue>,
}

impl ExternalDate {
    /// Creates a value from its calendar and exposed fields.
    /// A later duplicate of a field replaces the earlier one.
    pub fn new(calendar: CalendarSystem, fields: impl IntoIterator<Item = FieldValue>) -> Self {
        let mut date = Self {
            calendar,
            fields: Vec::new(),
        };
        for field_value in fields {
            date.set(field_value);
        }
        date
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    fn find(&self, field: DateField) -> Option<&FieldValue> {
        self.fields.iter().find(|field_value| field_value.field() == field)
    }

    fn set(&mut self, field_value: FieldValue) {
        match self
            .fields
            .iter_mut()
            .find(|existing| existing.field() == field_value.field())
        {
            Some(existing) => *existing = field_value,
            None => self.fields.push(field_value),
        }
    }
}

impl FieldBearing for ExternalDate {
    fn is_supported(&self, field: DateField) -> bool {
        self.find(field).is_some()
    }

    fn get_raw(&self, field: DateField) -> Result<i64> {
        self.find(field)
            .map(FieldValue::value)
            .ok_or(DateTimeError::UnsupportedField { field })
    }

    fn calendar(&self) -> CalendarSystem {
        self.calendar.clone()
    }
}

impl Adjustable for ExternalDate {
    fn with_field(&self, field: DateField, value: i64) -> Result<Self> {
        let current = self.find(field).ok_or(DateTimeError::UnsupportedField { field })?;
        let replaced = current.with_value(value);
        replaced.valid_value()?;
        let mut copy = self.clone();
        copy.set(replaced);
        Ok(copy)
    }
}

/// The adjustable date-like values this crate interacts with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum DateLike {
    Iso(LocalDate),
    External(ExternalDate),
}

impl FieldBearing for DateLike {
    fn is_supported(&self, field: DateField) -> bool {
        match self {
            Self::Iso(date) => date.is_supported(field),
            Self::External(date) => date.is_supported(field),
        }
    }

    fn range(&self, field: DateField) -> Result<ValueRange> {
        match self {
            Self::Iso(date) => date.range(field),
            Self::External(date) => date.range(field),
        }
    }

    fn get_raw(&self, field: DateField) -> Result<i64> {
        match self {
            Self::Iso(date) => date.get_raw(field),
            Self::External(date) => date.get_raw(field),
        }
    }

    fn calendar(&self) -> CalendarSystem {
        match self {
            Self::Iso(date) => date.calendar(),
            Self::External(date) => date.calendar(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Iso(date) => date.type_name(),
            Self::External(date) => date.type_name(),
        }
    }
}

impl Adjustable for DateLike {
    fn with_field(&self, field: DateField, value: i64) -> Result<Self> {
        match self {
            Self::Iso(date) => date.with_field(field, value).map(Self::Iso),
            Self::External(date) => date.with_field(field, value).map(Self::External),
        }
    }
}
