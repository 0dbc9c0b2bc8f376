//! Infrastructure adapters for the lineup manager.
//!
//! This crate implements the ports defined in `lineup-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod store;

// Re-export commonly used adapters
pub use store::{CsvFileStore, LoadReport, MemoryStore, SkippedLine};
