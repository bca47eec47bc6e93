use super::messages::{
    MESSAGE_DUPLICATE_PERSON, MESSAGE_DUPLICATE_PERSON_ORIGINAL, MESSAGE_EDIT_SUCCESS,
    MESSAGE_INVALID_PERSON_DISPLAYED_INDEX, MESSAGE_PERSON_NOT_IN_ADDRESSBOOK,
};
use crate::core::PersonRecord;

/// Terminal result of one edit.
///
/// Every variant except `RollbackFailed` leaves the collection either with the
/// edit committed or exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The replacement was stored. Carries the record as it was before the edit.
    Success { original: PersonRecord },
    /// The displayed index does not point into the listing.
    InvalidIndex,
    /// The listed record is no longer in the collection.
    TargetNotFound,
    /// The replacement's name is taken. The original record was put back.
    DuplicateRejected,
    /// The replacement's name is taken and the original could not be put back
    /// either. `lost` is no longer in the collection.
    RollbackFailed { lost: PersonRecord },
}

impl EditOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EditOutcome::Success { .. })
    }

    /// Returns `true` only when the collection lost a record.
    pub fn is_data_loss(&self) -> bool {
        matches!(self, EditOutcome::RollbackFailed { .. })
    }

    pub fn message(&self) -> String {
        match self {
            EditOutcome::Success { original } => format!("{}{}", MESSAGE_EDIT_SUCCESS, original),
            EditOutcome::InvalidIndex => MESSAGE_INVALID_PERSON_DISPLAYED_INDEX.to_string(),
            EditOutcome::TargetNotFound => MESSAGE_PERSON_NOT_IN_ADDRESSBOOK.to_string(),
            EditOutcome::DuplicateRejected => MESSAGE_DUPLICATE_PERSON.to_string(),
            EditOutcome::RollbackFailed { .. } => MESSAGE_DUPLICATE_PERSON_ORIGINAL.to_string(),
        }
    }
}
