//! Infrastructure layer: spreadsheet template IO and the last-generated-file slot.

pub mod debug_dump;
pub mod last_file;
pub mod template;

pub use debug_dump::{dump_last_file, DumpedFile};
pub use last_file::{generated_filename, GeneratedFile, InMemoryLastFileStore, LastFileStore};
pub use template::TemplateFiller;
