use super::{ListingIndexResolver, PersonCollection};
use crate::core::{AddressBookError, PersonRecord, Result};

/// Displayed positions start at 1.
pub const DISPLAYED_INDEX_OFFSET: usize = 1;

/// Snapshot of the people last shown to the user.
///
/// The snapshot is not tied to the live collection and goes stale as soon as
/// the collection changes.
#[derive(Debug, Clone, Default)]
pub struct DisplayListing {
    shown: Vec<PersonRecord>,
}

impl DisplayListing {
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        Self { shown: records }
    }

    pub fn snapshot<C: PersonCollection + ?Sized>(collection: &C) -> Self {
        Self::from_records(collection.records().to_vec())
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// Rows with their displayed positions.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &PersonRecord)> {
        self.shown
            .iter()
            .enumerate()
            .map(|(i, record)| (i + DISPLAYED_INDEX_OFFSET, record))
    }
}

impl ListingIndexResolver for DisplayListing {
    fn resolve(&self, index: usize) -> Result<PersonRecord> {
        index
            .checked_sub(DISPLAYED_INDEX_OFFSET)
            .and_then(|i| self.shown.get(i))
            .cloned()
            .ok_or(AddressBookError::InvalidIndex(index))
    }
}
