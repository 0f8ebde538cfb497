//! Domain types.

mod file;
mod secret;
pub mod variable;

pub use file::FileRecord;
pub use secret::Secret;
pub use variable::VariableEntry;
