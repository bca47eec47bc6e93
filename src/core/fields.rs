use super::{Field, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[\p{Alphabetic}\p{N} ]+$").unwrap();
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\d+$").unwrap();
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[\w.]+@[\w.]+$").unwrap();
    static ref ADDRESS_PATTERN: Regex = Regex::new(r"^.+$").unwrap();
    static ref TAG_PATTERN: Regex = Regex::new(r"^[\p{Alphabetic}\p{N}]+$").unwrap();
}

pub const NAME_CONSTRAINTS: &str = "Person names should be spaces or alphanumeric characters";
pub const PHONE_CONSTRAINTS: &str = "Person phone numbers should only contain numbers";
pub const EMAIL_CONSTRAINTS: &str =
    "Person emails should be 2 alphanumeric/period strings separated by '@'";
pub const ADDRESS_CONSTRAINTS: &str = "Person addresses can be in any format";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

fn checked(field: Field, raw: &str, pattern: &Regex, reason: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if pattern.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::new(field, raw, reason))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        checked(Field::Name, raw, &NAME_PATTERN, NAME_CONSTRAINTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a contact detail type: a validated value plus a privacy flag.
macro_rules! contact_field {
    ($(#[$meta:meta])* $ty:ident, $field:expr, $pattern:ident, $reason:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $ty {
            value: String,
            is_private: bool,
        }

        impl $ty {
            pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
                let value = checked($field, raw, &$pattern, $reason)?;
                Ok(Self { value, is_private })
            }

            pub fn value(&self) -> &str {
                &self.value
            }

            pub fn is_private(&self) -> bool {
                self.is_private
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

contact_field!(Phone, Field::Phone, PHONE_PATTERN, PHONE_CONSTRAINTS);
contact_field!(Email, Field::Email, EMAIL_PATTERN, EMAIL_CONSTRAINTS);
contact_field!(
    /// Free-form postal address. Anything non-blank on a single line is accepted.
    Address,
    Field::Address,
    ADDRESS_PATTERN,
    ADDRESS_CONSTRAINTS
);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        // Tags are not trimmed: surrounding whitespace is a format error.
        if TAG_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::new(Field::Tag, raw, TAG_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Set of tags attached to a person. Repeated names collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every raw name, failing on the first malformed one.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = names
            .into_iter()
            .map(|name| Tag::new(name.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { tags })
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_alphanumeric_and_spaces() {
        assert_eq!(Name::new("  John Doe 2nd ").unwrap().as_str(), "John Doe 2nd");
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
        assert!(Name::new("John*Doe").is_err());
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = Phone::new("98765432", true).unwrap();
        assert_eq!(phone.value(), "98765432");
        assert!(phone.is_private());

        let err = Phone::new("+65 9876", false).unwrap_err();
        assert_eq!(err.field, Field::Phone);
        assert_eq!(err.reason, PHONE_CONSTRAINTS);
    }

    #[test]
    fn test_email_format() {
        assert!(Email::new("johnd@gmail.com", false).is_ok());
        assert!(Email::new("first.last@mail.example.org", false).is_ok());
        assert!(Email::new("no-at-sign", false).is_err());
        assert!(Email::new("two@@signs", false).is_err());
        assert!(Email::new("@domain.com", false).is_err());
    }

    #[test]
    fn test_address_any_non_blank_text() {
        assert!(Address::new("311, Clementi Ave 2, #02-25", false).is_ok());
        assert!(Address::new("", false).is_err());
        assert!(Address::new("   ", true).is_err());
    }

    #[test]
    fn test_tag_set_collapses_duplicates() {
        let tags = TagSet::from_names(["friends", "owesMoney", "friends"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Tag::new("friends").unwrap()));
        assert_eq!(tags.to_string(), "[friends][owesMoney]");
    }

    #[test]
    fn test_tag_set_rejects_first_bad_tag() {
        let err = TagSet::from_names(["ok", "not ok", "also-bad"]).unwrap_err();
        assert_eq!(err.field, Field::Tag);
        assert_eq!(err.value, "not ok");
    }
}
