use crate::{DateField, ValueRange};

/// Error type for field validation, conversion and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Value lies outside the field's valid range.
    #[error("Invalid value for {field} (valid values {range}): {value}")]
    Range {
        field: DateField,
        value: i64,
        range: ValueRange,
    },

    /// Field is not supported by the temporal value.
    #[error("Unsupported field: {field}")]
    UnsupportedField { field: DateField },

    /// Conversion between temporal values failed, or the calendar system is not ISO.
    #[error("{message}")]
    Conversion {
        message: String,
        #[source]
        source: Option<Box<DateTimeError>>,
    },

    /// Value does not fit the `i32` width expected by the caller.
    #[error("Value of {field} does not fit in an i32: {value}")]
    Overflow { field: DateField, value: i64 },

    /// Text could not be parsed.
    #[error("Text '{text}' could not be parsed at index {position}: {reason}")]
    Parse {
        text: String,
        position: usize,
        reason: String,
    },

    /// Format pattern could not be compiled.
    #[error("Invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// Range bounds are not ordered.
    #[error(
        "Invalid range bounds: minimum {minimum}, smallest maximum {smallest_maximum}, largest maximum {largest_maximum}"
    )]
    InvalidRange {
        minimum: i64,
        smallest_maximum: i64,
        largest_maximum: i64,
    },
}

impl DateTimeError {
    pub(crate) fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn conversion_caused_by(message: impl Into<String>, cause: Self) -> Self {
        Self::Conversion {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }

    /// The field the error refers to, if any.
    pub const fn field(&self) -> Option<DateField> {
        match self {
            Self::Range { field, .. }
            | Self::UnsupportedField { field }
            | Self::Overflow { field, .. } => Some(*field),
            Self::Conversion { .. }
            | Self::Parse { .. }
            | Self::Pattern { .. }
            | Self::InvalidRange { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DateTimeError>;
