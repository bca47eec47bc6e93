use super::EditOutcome;
use crate::storage::{ListingIndexResolver, PersonCollection};

/// Collaborators a command borrows for the duration of one call.
pub struct CommandContext<'a> {
    pub collection: &'a mut dyn PersonCollection,
    pub listing: &'a dyn ListingIndexResolver,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        collection: &'a mut dyn PersonCollection,
        listing: &'a dyn ListingIndexResolver,
    ) -> Self {
        Self { collection, listing }
    }
}

/// What a command reports back: user feedback plus the typed outcome, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub outcome: Option<EditOutcome>,
}

impl CommandResult {
    pub fn from_outcome(outcome: EditOutcome) -> Self {
        Self {
            feedback: outcome.message(),
            outcome: Some(outcome),
        }
    }
}

pub trait Command {
    /// Command word, for logging
    fn name(&self) -> &'static str;

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}
