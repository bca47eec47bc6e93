use super::{Address, Email, Name, Phone, TagSet, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule a collection uses to decide whether two names collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameMatching {
    #[default]
    Exact,
    CaseInsensitive,
}

impl NameMatching {
    pub fn matches(&self, a: &Name, b: &Name) -> bool {
        match self {
            NameMatching::Exact => a.as_str() == b.as_str(),
            NameMatching::CaseInsensitive => a.as_str().to_lowercase() == b.as_str().to_lowercase(),
        }
    }
}

/// A person entry. Immutable once built; edits replace the whole record.
///
/// `PartialEq` compares every field. Duplicate detection inside a collection
/// goes through [`PersonRecord::is_same_person`], which only looks at the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRecord {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: TagSet,
}

impl PersonRecord {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Builds a record from raw values, validating in field order.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw<I, S>(
        name: &str,
        phone: &str,
        is_phone_private: bool,
        email: &str,
        is_email_private: bool,
        address: &str,
        is_address_private: bool,
        tags: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(
            Name::new(name)?,
            Phone::new(phone, is_phone_private)?,
            Email::new(email, is_email_private)?,
            Address::new(address, is_address_private)?,
            TagSet::from_names(tags)?,
        ))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn is_same_person(&self, other: &PersonRecord, matching: NameMatching) -> bool {
        matching.matches(&self.name, &other.name)
    }

    /// Text form with private contact details left out.
    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        if !self.phone.is_private() {
            text.push_str(&format!(" Phone: {}", self.phone));
        }
        if !self.email.is_private() {
            text.push_str(&format!(" Email: {}", self.email));
        }
        if !self.address.is_private() {
            text.push_str(&format!(" Address: {}", self.address));
        }
        text.push_str(&format!(" Tags: {}", self.tags));
        text
    }
}

fn private_marker(is_private: bool) -> &'static str {
    if is_private { "(private) " } else { "" }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {}{} Email: {}{} Address: {}{} Tags: {}",
            self.name,
            private_marker(self.phone.is_private()),
            self.phone,
            private_marker(self.email.is_private()),
            self.email,
            private_marker(self.address.is_private()),
            self.address,
            self.tags
        )
    }
}
