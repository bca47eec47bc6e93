use crate::core::{AddressBookError, NameMatching, Result};

/// Address book configuration
///
/// Built with chained setters, then checked with [`AddressBookConfig::validate`].
#[derive(Debug, Clone)]
pub struct AddressBookConfig {
    /// Logical name, used in log output
    pub name: String,

    /// Rule used to detect duplicate names on insertion
    pub name_matching: NameMatching,

    /// Number of records to preallocate room for
    pub initial_capacity: usize,
}

impl AddressBookConfig {
    /// Create a new configuration with default settings
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            name_matching: NameMatching::Exact,
            initial_capacity: 16,
        }
    }

    /// Set the name matching rule
    pub fn name_matching(mut self, matching: NameMatching) -> Self {
        self.name_matching = matching;
        self
    }

    /// Compare names ignoring case
    pub fn case_insensitive_names(self) -> Self {
        self.name_matching(NameMatching::CaseInsensitive)
    }

    /// Set the initial capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AddressBookError::InvalidConfig(
                "Address book name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self::new("addressbook")
    }
}
