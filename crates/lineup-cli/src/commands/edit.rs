//! One-shot lineup changes: `add`, `remove`, `move`, `edit-position`,
//! `edit-stats`.
//!
//! Each handler loads the lineup, applies one change through the service
//! (which saves it) and reports the same line the menu would.

use lineup_core::application::Outcome;

use crate::{
    cli::{AddArgs, EditPositionArgs, EditStatsArgs, GlobalArgs, MoveArgs, SlotArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn add(
    args: AddArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut service = super::open_service(global, config)?;
    let outcome = service.add_player(&args.name, &args.position, args.at_bats, args.hits)?;
    report(output, &outcome, "added")
}

pub fn remove(
    args: SlotArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut service = super::open_service(global, config)?;
    let outcome = service.remove_player(args.slot)?;
    report(output, &outcome, "deleted")
}

pub fn move_player(
    args: MoveArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut service = super::open_service(global, config)?;
    let outcome = service.move_player(args.from, args.to)?;
    report(output, &outcome, "moved")
}

pub fn edit_position(
    args: EditPositionArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut service = super::open_service(global, config)?;
    let outcome = service.edit_position(args.slot, &args.position)?;
    report(output, &outcome, "updated")
}

pub fn edit_stats(
    args: EditStatsArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut service = super::open_service(global, config)?;
    let outcome = service.edit_stats(args.slot, args.at_bats, args.hits)?;
    report(output, &outcome, "updated")
}

fn report(output: &OutputManager, outcome: &Outcome, verb: &str) -> CliResult<()> {
    output.success(&format!("{} was {verb}.", outcome.name))?;
    Ok(())
}
