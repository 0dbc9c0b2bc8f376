//! Interactive menu session.
//!
//! The session owns a [`LineupService`] and talks to the user through a
//! [`Prompter`] and a writer. Every operation error is reported on one line
//! and the loop carries on; only terminal I/O failures end the session early.

mod menu;
mod prompt;

use menu::{MenuChoice, menu_text};
#[cfg(feature = "interactive")]
pub use prompt::DialoguerPrompter;
pub use prompt::{LinePrompter, Prompter};

use std::io::Write;

use tracing::{debug, instrument, warn};

use lineup_core::{
    application::{LineupService, Outcome},
    domain::{PlayerRecord, Position},
    error::LineupResult,
};

use crate::{
    error::{CliError, CliResult},
    output::{render_table, rule},
};

/// Why a flow stopped before finishing.
enum Stop {
    /// Empty answer.
    Cancelled,
    /// Already reported to the user.
    Rejected,
    /// Input ran out.
    EndOfInput,
    Failed(CliError),
}

impl From<CliError> for Stop {
    fn from(err: CliError) -> Self {
        Stop::Failed(err)
    }
}

impl From<std::io::Error> for Stop {
    fn from(err: std::io::Error) -> Self {
        Stop::Failed(err.into())
    }
}

type Flow = Result<(), Stop>;

/// The menu loop.
pub struct Session<P, W> {
    service: LineupService,
    prompter: P,
    out: W,
    title: String,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(service: LineupService, prompter: P, out: W, title: impl Into<String>) -> Self {
        Self {
            service,
            prompter,
            out,
            title: title.into(),
        }
    }

    /// Run until the user exits or input ends.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> CliResult<()> {
        let banner = format!("{rule}\n {}\n{rule}\n", self.title, rule = rule());
        self.out.write_all(banner.as_bytes())?;

        loop {
            self.out.write_all(menu_text().as_bytes())?;

            let Some(answer) = self.prompter.read_line("Menu option")? else {
                debug!("Input ended at the menu");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Display) => self.display(),
                Some(MenuChoice::Add) => self.add(),
                Some(MenuChoice::Remove) => self.remove(),
                Some(MenuChoice::Move) => self.move_player(),
                Some(MenuChoice::EditPosition) => self.edit_position(),
                Some(MenuChoice::EditStats) => self.edit_stats(),
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "Bye!")?;
                    return Ok(());
                }
                None => self.say("Invalid menu option. Please try again."),
            };

            match flow {
                Ok(()) | Err(Stop::Rejected) => {}
                Err(Stop::Cancelled) => writeln!(self.out, "Cancelled.")?,
                Err(Stop::EndOfInput) => {
                    debug!("Input ended mid-action");
                    return Ok(());
                }
                Err(Stop::Failed(err)) => return Err(err),
            }
        }
    }

    /// Hand back the service, e.g. to inspect the lineup after a run.
    #[cfg(test)]
    pub fn into_service(self) -> LineupService {
        self.service
    }

    // ── Flows ─────────────────────────────────────────────────────────────

    fn display(&mut self) -> Flow {
        let table = render_table(self.service.roster());
        writeln!(self.out)?;
        self.out.write_all(table.as_bytes())?;
        Ok(())
    }

    fn add(&mut self) -> Flow {
        let name = self.ask_text("Name")?;
        let position = self.ask_position("Position")?;
        let at_bats = self.ask_int("At bats")?;
        let hits = self.ask_int("Hits")?;

        let result = self
            .service
            .add_player(&name, position.code(), at_bats, hits);
        self.report(result, "added")
    }

    fn remove(&mut self) -> Flow {
        let slot = self.ask_slot("Lineup number")?;
        let result = self.service.remove_player(slot);
        self.report(result, "deleted")
    }

    fn move_player(&mut self) -> Flow {
        let from = self.ask_slot("Current lineup number")?;
        let name = self.selected(from)?.name().to_string();
        self.say(&format!("{name} was selected."))?;

        let to = self.ask_slot("New lineup number")?;
        let result = self.service.move_player(from, to);
        self.report(result, "moved")
    }

    fn edit_position(&mut self) -> Flow {
        let slot = self.ask_slot("Lineup number")?;
        let player = self.selected(slot)?;
        let line = format!("You selected {} POS={}", player.name(), player.position());
        self.say(&line)?;

        let position = self.ask_position("Position")?;
        let result = self.service.edit_position(slot, position.code());
        self.report(result, "updated")
    }

    fn edit_stats(&mut self) -> Flow {
        let slot = self.ask_slot("Lineup number")?;
        let player = self.selected(slot)?;
        let line = format!(
            "You selected {} AB={} H={}",
            player.name(),
            player.at_bats(),
            player.hits()
        );
        self.say(&line)?;

        let at_bats = self.ask_int("At bats")?;
        let hits = self.ask_int("Hits")?;
        let result = self.service.edit_stats(slot, at_bats, hits);
        self.report(result, "updated")
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn say(&mut self, line: &str) -> Flow {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn report(&mut self, result: LineupResult<Outcome>, verb: &str) -> Flow {
        match result {
            Ok(outcome) => self.say(&format!("{} was {verb}.", outcome.name)),
            Err(err) => {
                warn!(error = %err, "Menu action failed");
                self.say(&err.to_string())
            }
        }
    }

    fn selected(&self, slot: usize) -> Result<&PlayerRecord, Stop> {
        // ask_slot already checked the range.
        self.service.roster().get(slot).ok_or(Stop::Rejected)
    }

    /// One non-empty answer.
    fn ask_text(&mut self, prompt: &str) -> Result<String, Stop> {
        match self.prompter.read_line(prompt)? {
            None => Err(Stop::EndOfInput),
            Some(answer) if answer.trim().is_empty() => Err(Stop::Cancelled),
            Some(answer) => Ok(answer.trim().to_string()),
        }
    }

    /// Re-prompts until the answer is an integer.
    fn ask_int(&mut self, prompt: &str) -> Result<i64, Stop> {
        loop {
            let answer = self.ask_text(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid integer. Please try again.")?,
            }
        }
    }

    /// Re-prompts until the answer is a known position.
    fn ask_position(&mut self, prompt: &str) -> Result<Position, Stop> {
        loop {
            let answer = self.ask_text(prompt)?;
            match answer.parse() {
                Ok(position) => return Ok(position),
                Err(_) => {
                    let line = format!("Invalid position. Choose from: {}", Position::codes());
                    self.say(&line)?;
                }
            }
        }
    }

    /// A lineup number that exists right now.
    fn ask_slot(&mut self, prompt: &str) -> Result<usize, Stop> {
        let answer = self.ask_int(prompt)?;
        let len = self.service.roster().len();
        match usize::try_from(answer) {
            Ok(slot) if (1..=len).contains(&slot) => Ok(slot),
            _ => {
                self.say("Invalid lineup number.")?;
                Err(Stop::Rejected)
            }
        }
    }
}
