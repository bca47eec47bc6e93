pub mod address_book;
pub mod collection;
pub mod listing;

pub use address_book::AddressBook;
pub use collection::{ListingIndexResolver, PersonCollection};
pub use listing::{DISPLAYED_INDEX_OFFSET, DisplayListing};
