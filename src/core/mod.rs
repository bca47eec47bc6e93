pub mod error;
pub mod fields;
pub mod person;

pub use error::{AddressBookError, Field, Result, ValidationError};
pub use fields::{Address, Email, Name, Phone, Tag, TagSet};
pub use person::{NameMatching, PersonRecord};
