//! `lineup check`: load the lineup file and list what could not be read.

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let store = super::csv_store(global, config);
    let report = store.load_with_report()?;
    let path = store.path().display();

    for skipped in &report.skipped {
        output.warning(&format!("line {}: {}", skipped.line, skipped.reason))?;
    }

    if report.skipped.is_empty() {
        output.success(&format!(
            "{} player(s) loaded from {path}",
            report.players.len()
        ))?;
        return Ok(());
    }

    Err(CliError::InvalidInput {
        message: format!(
            "{} line(s) in {path} could not be read; {} player(s) loaded",
            report.skipped.len(),
            report.players.len()
        ),
        source: None,
    })
}
