// ============================================================================
// Address book edit library
// ============================================================================

pub mod command;
pub mod config;
pub mod core;
pub mod storage;

// Re-export main types for convenience
pub use crate::command::{Command, CommandContext, CommandResult, EditCommand, EditOutcome};
pub use crate::config::AddressBookConfig;
pub use crate::core::{
    Address, AddressBookError, Email, Field, Name, NameMatching, PersonRecord, Phone, Result, Tag,
    TagSet, ValidationError,
};
pub use crate::storage::{AddressBook, DisplayListing, ListingIndexResolver, PersonCollection};

/// Runs an edit against `book` using the listing the user last saw.
///
/// # Examples
///
/// ```
/// use addressbook_edit::{AddressBook, DisplayListing, EditCommand, EditOutcome, PersonCollection, PersonRecord};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut book = AddressBook::new();
/// book.insert(PersonRecord::from_raw("Alice", "111", false, "a@x.io", false, "Street 1", false, ["friends"])?)?;
/// let listing = DisplayListing::snapshot(&book);
///
/// let command = EditCommand::new("1", "Alicia", "222", false, "a@x.io", false, "Street 2", true, ["friends"])?;
/// let outcome = addressbook_edit::edit(&mut book, &listing, &command);
///
/// assert!(matches!(outcome, EditOutcome::Success { .. }));
/// assert_eq!(book.records()[0].name().as_str(), "Alicia");
/// # Ok(())
/// # }
/// ```
pub fn edit(
    book: &mut AddressBook,
    listing: &DisplayListing,
    command: &EditCommand,
) -> EditOutcome {
    command.execute_edit(book, listing)
}
