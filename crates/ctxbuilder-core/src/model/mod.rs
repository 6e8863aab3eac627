/// Data model: component kinds and matched file sets.
pub mod file_set;

pub use file_set::{ComponentKind, FileSet};
