pub mod command;
pub mod edit;
pub mod messages;
pub mod outcome;

pub use command::{Command, CommandContext, CommandResult};
pub use edit::EditCommand;
pub use outcome::EditOutcome;
