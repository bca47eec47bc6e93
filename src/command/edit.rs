use super::{Command, CommandContext, CommandResult, EditOutcome};
use crate::core::{AddressBookError, Field, PersonRecord, ValidationError};
use crate::storage::{ListingIndexResolver, PersonCollection};
use log::{debug, warn};

/// Replaces the person at a displayed index with a newly built record.
///
/// The replacement is validated in full when the command is built, so
/// executing never sees a partial record. Execution removes the target,
/// inserts the replacement, and puts the target back if the replacement's
/// name is already taken.
#[derive(Debug, Clone)]
pub struct EditCommand {
    target_index: usize,
    replacement: PersonRecord,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const MESSAGE_USAGE: &'static str = "edit:\n\
Edits a person's details in the address book based on specified index. \
Contact details can be marked private by prepending 'p' to the prefix.\n\t\
Parameters: INDEX NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\t\
Example: edit 1 John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

    /// Builds the command from raw values.
    ///
    /// Fields are checked in order (index, name, phone, email, address, tags)
    /// and the first failure is returned. Nothing is mutated here.
    #[allow(clippy::too_many_arguments)]
    pub fn new<I, S>(
        index: &str,
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
        let target_index = parse_index(index)?;
        let replacement = PersonRecord::from_raw(
            name,
            phone,
            is_phone_private,
            email,
            is_email_private,
            address,
            is_address_private,
            tags,
        )?;
        Ok(Self::with_record(target_index, replacement))
    }

    /// Builds the command from an already validated record.
    pub fn with_record(target_index: usize, replacement: PersonRecord) -> Self {
        Self {
            target_index,
            replacement,
        }
    }

    /// 1-based position in the displayed listing.
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn replacement(&self) -> &PersonRecord {
        &self.replacement
    }

    pub fn execute_edit(
        &self,
        collection: &mut dyn PersonCollection,
        listing: &dyn ListingIndexResolver,
    ) -> EditOutcome {
        let target = match listing.resolve(self.target_index) {
            Ok(record) => record,
            Err(err) => {
                debug!("edit {}: {}", self.target_index, err);
                return EditOutcome::InvalidIndex;
            }
        };

        let (position, removed) = match collection.remove(&target) {
            Ok(removal) => removal,
            Err(err) => {
                debug!("edit {}: listed person is stale: {}", self.target_index, err);
                return EditOutcome::TargetNotFound;
            }
        };

        match collection.insert(self.replacement.clone()) {
            Ok(()) => {
                debug!(
                    "edit {}: replaced '{}' with '{}'",
                    self.target_index,
                    removed.name(),
                    self.replacement.name()
                );
                EditOutcome::Success { original: removed }
            }
            Err(AddressBookError::DuplicatePerson(name)) => {
                self.roll_back(collection, removed, position, &name)
            }
            Err(err) => {
                // Collections only reject inserts as duplicates; anything else
                // still gets the original put back.
                warn!("edit {}: unexpected insert failure: {}", self.target_index, err);
                self.roll_back(
                    collection,
                    removed,
                    position,
                    self.replacement.name().as_str(),
                )
            }
        }
    }

    fn roll_back(
        &self,
        collection: &mut dyn PersonCollection,
        removed: PersonRecord,
        position: usize,
        conflicting_name: &str,
    ) -> EditOutcome {
        debug!(
            "edit {}: name '{}' already taken, restoring '{}'",
            self.target_index,
            conflicting_name,
            removed.name()
        );
        match collection.restore(removed.clone(), position) {
            Ok(()) => EditOutcome::DuplicateRejected,
            Err(err) => {
                warn!(
                    "edit {}: rollback failed, '{}' is no longer in the collection: {}",
                    self.target_index,
                    removed.name(),
                    err
                );
                EditOutcome::RollbackFailed { lost: removed }
            }
        }
    }
}

impl Command for EditCommand {
    fn name(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let outcome = self.execute_edit(&mut *ctx.collection, ctx.listing);
        CommandResult::from_outcome(outcome)
    }
}

fn parse_index(raw: &str) -> Result<usize, ValidationError> {
    raw.trim().parse::<usize>().map_err(|_| {
        ValidationError::new(Field::Index, raw, "Index should be a non-negative integer")
    })
}
