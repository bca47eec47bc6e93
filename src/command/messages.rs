//! Feedback strings shown to the user after a command runs.

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_PERSON_NOT_IN_ADDRESSBOOK: &str = "Person could not be found in address book";

pub const MESSAGE_EDIT_SUCCESS: &str = "Person edited: ";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This name already exists in the address book";
pub const MESSAGE_DUPLICATE_PERSON_ORIGINAL: &str = "Failed to edit because new name already exists in address book, \
specified person to edit is deleted. \n\tPlease re-add the specified person manually.";
