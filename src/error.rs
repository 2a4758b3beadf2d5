//! Error types for sitemap construction and rendering.
//!
//! Construction of every domain entity is fail-fast: a [`ModelError`] names the
//! violated rule ([`ErrorKind`]), the offending field and a readable message.
//! Rendering can only fail while serializing the finished document, which is
//! reported as [`GenerateError`].

use std::fmt;

/// The rule a [`ModelError`] reports as violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RequiredValueMissing,
    ValueOutOfRange,
    InvalidEnumValue,
    StringTooLong,
    SequenceTooLong,
    EmptySequence,
    TypeMismatch,
    MutuallyExclusiveFieldsViolated,
    RelationalConstraintViolated,
    InvalidLocation,
    InvalidTimestamp,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::RequiredValueMissing => "required_value_missing",
            ErrorKind::ValueOutOfRange => "value_out_of_range",
            ErrorKind::InvalidEnumValue => "invalid_enum_value",
            ErrorKind::StringTooLong => "string_too_long",
            ErrorKind::SequenceTooLong => "sequence_too_long",
            ErrorKind::EmptySequence => "empty_sequence",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::MutuallyExclusiveFieldsViolated => "mutually_exclusive_fields_violated",
            ErrorKind::RelationalConstraintViolated => "relational_constraint_violated",
            ErrorKind::InvalidLocation => "invalid_location",
            ErrorKind::InvalidTimestamp => "invalid_timestamp",
        };
        f.write_str(name)
    }
}

/// A domain invariant violated while constructing a sitemap entity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("{field}: required value is missing")]
    RequiredValueMissing { field: &'static str },

    #[error("{field}: {message}")]
    ValueOutOfRange { field: &'static str, message: String },

    #[error("{field}: unknown value \"{value}\"")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("{field}: length must not be greater than {max} characters, got {actual}")]
    StringTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field}: must not contain more than {max} entries, got {actual}")]
    SequenceTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field}: must not be empty")]
    EmptySequence { field: &'static str },

    #[error("{field}: {message}")]
    TypeMismatch { field: &'static str, message: String },

    #[error("{fields}: {message}")]
    MutuallyExclusiveFieldsViolated {
        fields: &'static str,
        message: String,
    },

    #[error("{field}: {message}")]
    RelationalConstraintViolated { field: &'static str, message: String },

    #[error("invalid location \"{value}\": {reason}")]
    InvalidLocation { value: String, reason: String },

    #[error("invalid timestamp \"{value}\": {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl ModelError {
    pub(crate) fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValueOutOfRange {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn relational(field: &'static str, message: impl Into<String>) -> Self {
        Self::RelationalConstraintViolated {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_enum(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Returns the violated rule without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::RequiredValueMissing { .. } => ErrorKind::RequiredValueMissing,
            ModelError::ValueOutOfRange { .. } => ErrorKind::ValueOutOfRange,
            ModelError::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
            ModelError::StringTooLong { .. } => ErrorKind::StringTooLong,
            ModelError::SequenceTooLong { .. } => ErrorKind::SequenceTooLong,
            ModelError::EmptySequence { .. } => ErrorKind::EmptySequence,
            ModelError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ModelError::MutuallyExclusiveFieldsViolated { .. } => {
                ErrorKind::MutuallyExclusiveFieldsViolated
            }
            ModelError::RelationalConstraintViolated { .. } => {
                ErrorKind::RelationalConstraintViolated
            }
            ModelError::InvalidLocation { .. } => ErrorKind::InvalidLocation,
            ModelError::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
        }
    }
}

/// Checks a string's length in Unicode scalar values, not bytes.
pub(crate) fn ensure_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ModelError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ModelError::StringTooLong { field, max, actual });
    }
    Ok(())
}

/// Failure while serializing a generated document to text.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to write XML: {0}")]
    Write(String),

    #[error("Generated XML is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A text or attribute value holds a character XML 1.0 cannot represent.
    #[error("<{element}> contains {character:?}, which is not allowed in XML")]
    InvalidCharacter { element: String, character: char },
}
