use crate::core::{PersonRecord, Result};

/// Ordered collection of people that enforces name uniqueness.
///
/// Implementations own the invariant: no two members may be the same person
/// under the collection's name matching rule. Callers cannot bypass it.
pub trait PersonCollection {
    /// Adds a record at the end of the collection.
    ///
    /// # Errors
    /// `AddressBookError::DuplicatePerson` if a member already has a matching name.
    fn insert(&mut self, record: PersonRecord) -> Result<()>;

    /// Removes the member equal in every field to `record`.
    ///
    /// Returns the position it held and the removed record. The relative
    /// order of the remaining members is kept.
    ///
    /// # Errors
    /// `AddressBookError::PersonNotFound` if no member equals `record`.
    fn remove(&mut self, record: &PersonRecord) -> Result<(usize, PersonRecord)>;

    /// Puts a record back at `position`, or at the end if `position` is past it.
    ///
    /// Same uniqueness check as [`PersonCollection::insert`].
    ///
    /// # Errors
    /// `AddressBookError::DuplicatePerson` if a member already has a matching name.
    fn restore(&mut self, record: PersonRecord, position: usize) -> Result<()>;

    /// Returns `true` if a member is equal in every field to `record`.
    fn contains(&self, record: &PersonRecord) -> bool;

    /// Returns the members in collection order.
    fn records(&self) -> &[PersonRecord];

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Maps a 1-based position in a displayed listing to a record.
pub trait ListingIndexResolver {
    /// # Errors
    /// `AddressBookError::InvalidIndex` if `index` is outside the listing.
    fn resolve(&self, index: usize) -> Result<PersonRecord>;
}
