//! `lineup` / `lineup menu`: the interactive session.

use std::io;

use tracing::info;

use lineup_core::application::LineupService;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::CliResult,
    session::{LinePrompter, Prompter, Session},
};

pub fn execute(global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    let service = super::open_service(global, config)?;
    info!(players = service.roster().len(), "Starting menu session");

    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if io::stdin().is_terminal() {
            return run(service, crate::session::DialoguerPrompter, config);
        }
    }

    let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    run(service, prompter, config)
}

fn run<P: Prompter>(service: LineupService, prompter: P, config: &AppConfig) -> CliResult<()> {
    Session::new(service, prompter, io::stdout(), config.output.title.as_str()).run()
}
