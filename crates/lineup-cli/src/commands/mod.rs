//! Command handlers, one module per subcommand.
//!
//! Handlers take already-parsed arguments plus the loaded [`AppConfig`] and
//! never parse anything themselves.

pub mod check;
pub mod completions;
pub mod config;
pub mod edit;
pub mod init;
pub mod menu;
pub mod show;

use lineup_adapters::CsvFileStore;
use lineup_core::application::LineupService;
use tracing::debug;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// The CSV store selected by `--file` or the config.
pub(crate) fn csv_store(global: &GlobalArgs, config: &AppConfig) -> CsvFileStore {
    let path = config.data_file(global);
    debug!(path = %path.display(), "Using lineup file");
    CsvFileStore::new(path)
}

/// Load the lineup into a service backed by the CSV store.
pub(crate) fn open_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<LineupService> {
    let store = csv_store(global, config);
    Ok(LineupService::open(Box::new(store))?)
}
