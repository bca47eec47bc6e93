use std::fmt;
use thiserror::Error;

/// Input field a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Index,
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Index => "index",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
            Field::Tag => "tag",
        };
        write!(f, "{}", name)
    }
}

/// A raw input value rejected while building a record or a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} '{value}': {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Person '{0}' already exists")]
    DuplicatePerson(String),

    #[error("Person '{0}' not found")]
    PersonNotFound(String),

    #[error("Displayed index {0} is out of range")]
    InvalidIndex(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_names_field() {
        let err = ValidationError::new(Field::Email, "nope", "bad format");
        assert_eq!(err.to_string(), "Invalid email 'nope': bad format");
    }

    #[test]
    fn test_validation_converts_transparently() {
        let err: AddressBookError = ValidationError::new(Field::Tag, "a b", "bad").into();
        assert!(matches!(err, AddressBookError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid tag 'a b': bad");
    }
}
