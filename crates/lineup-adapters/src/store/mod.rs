//! Roster store adapters.

mod csv_file;
mod memory;

pub use csv_file::{CsvFileStore, LoadReport, SkippedLine};
pub use memory::MemoryStore;
