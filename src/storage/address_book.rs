use super::PersonCollection;
use crate::config::AddressBookConfig;
use crate::core::{AddressBookError, NameMatching, PersonRecord, Result};
use log::debug;

/// In-memory address book: an ordered list of people with unique names.
#[derive(Debug, Clone)]
pub struct AddressBook {
    name: String,
    name_matching: NameMatching,
    people: Vec<PersonRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        let config = AddressBookConfig::default();
        Self {
            name: config.name,
            name_matching: config.name_matching,
            people: Vec::with_capacity(config.initial_capacity),
        }
    }

    pub fn from_config(config: AddressBookConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: config.name,
            name_matching: config.name_matching,
            people: Vec::with_capacity(config.initial_capacity),
        })
    }

    /// Builds an address book from `records`, rejecting the first duplicate.
    pub fn with_records(
        config: AddressBookConfig,
        records: impl IntoIterator<Item = PersonRecord>,
    ) -> Result<Self> {
        let mut book = Self::from_config(config)?;
        for record in records {
            book.insert(record)?;
        }
        Ok(book)
    }

    /// Returns `true` if a member has a name matching `record`'s.
    pub fn contains_same_person(&self, record: &PersonRecord) -> bool {
        self.people
            .iter()
            .any(|member| member.is_same_person(record, self.name_matching))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonRecord> {
        self.people.iter()
    }

    pub fn clear(&mut self) {
        self.people.clear();
    }

    fn insert_checked(&mut self, record: PersonRecord, position: usize) -> Result<()> {
        if self.contains_same_person(&record) {
            return Err(AddressBookError::DuplicatePerson(record.name().to_string()));
        }
        debug!(
            "Address book '{}': adding '{}' at {}",
            self.name,
            record.name(),
            position
        );
        self.people.insert(position, record);
        Ok(())
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonCollection for AddressBook {
    fn insert(&mut self, record: PersonRecord) -> Result<()> {
        let end = self.people.len();
        self.insert_checked(record, end)
    }

    fn remove(&mut self, record: &PersonRecord) -> Result<(usize, PersonRecord)> {
        let Some(position) = self.people.iter().position(|member| member == record) else {
            return Err(AddressBookError::PersonNotFound(record.name().to_string()));
        };
        debug!(
            "Address book '{}': removing '{}' at {}",
            self.name,
            record.name(),
            position
        );
        Ok((position, self.people.remove(position)))
    }

    fn restore(&mut self, record: PersonRecord, position: usize) -> Result<()> {
        let position = position.min(self.people.len());
        self.insert_checked(record, position)
    }

    fn contains(&self, record: &PersonRecord) -> bool {
        self.people.contains(record)
    }

    fn records(&self) -> &[PersonRecord] {
        &self.people
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, phone: &str) -> PersonRecord {
        PersonRecord::from_raw(name, phone, false, "a@b.c", false, "Main St", false, ["friends"])
            .unwrap()
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();
        book.insert(person("Bob", "2")).unwrap();

        let names: Vec<_> = book.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_insert_rejects_same_name_with_other_details() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();

        let result = book.insert(person("Alice", "999"));
        assert_eq!(result, Err(AddressBookError::DuplicatePerson("Alice".into())));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_same_contact_details_are_not_a_conflict() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();
        book.insert(person("Bob", "1")).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let config = AddressBookConfig::default().case_insensitive_names();
        let mut book = AddressBook::from_config(config).unwrap();
        book.insert(person("Alice", "1")).unwrap();
        assert!(book.insert(person("ALICE", "2")).is_err());
    }

    #[test]
    fn test_remove_requires_full_equality() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();
        book.insert(person("Bob", "2")).unwrap();
        book.insert(person("Carol", "3")).unwrap();

        assert_eq!(
            book.remove(&person("Bob", "7")),
            Err(AddressBookError::PersonNotFound("Bob".into()))
        );

        let (position, removed) = book.remove(&person("Bob", "2")).unwrap();
        assert_eq!(position, 1);
        assert_eq!(removed.name().as_str(), "Bob");
        let names: Vec<_> = book.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_restore_returns_record_to_its_slot() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();
        book.insert(person("Bob", "2")).unwrap();
        book.insert(person("Carol", "3")).unwrap();

        let (position, removed) = book.remove(&person("Bob", "2")).unwrap();
        book.restore(removed, position).unwrap();

        let names: Vec<_> = book.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_restore_checks_uniqueness() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();
        book.insert(person("Bob", "2")).unwrap();

        let (position, removed) = book.remove(&person("Bob", "2")).unwrap();
        book.insert(person("Bob", "9")).unwrap();

        assert_eq!(
            book.restore(removed, position),
            Err(AddressBookError::DuplicatePerson("Bob".into()))
        );
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_restore_past_end_appends() {
        let mut book = AddressBook::new();
        book.insert(person("Alice", "1")).unwrap();
        book.restore(person("Bob", "2"), 10).unwrap();

        let names: Vec<_> = book.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_with_records_rejects_duplicates() {
        let result = AddressBook::with_records(
            AddressBookConfig::default(),
            vec![person("Alice", "1"), person("Alice", "2")],
        );
        assert!(matches!(result, Err(AddressBookError::DuplicatePerson(_))));
    }

    #[test]
    fn test_from_config_validates() {
        let result = AddressBook::from_config(AddressBookConfig::new(""));
        assert!(matches!(result, Err(AddressBookError::InvalidConfig(_))));
    }
}
