//! Flat-file roster store using the `csv` crate.
//!
//! One player per line, four fields in a fixed order, no header:
//!
//! ```text
//! Alice,SS,10,3
//! Bob,P,0,0
//! "Smith, Jr.",CF,22,7
//! ```
//!
//! Loading is forgiving: a line that cannot become a valid [`PlayerRecord`]
//! is skipped with a warning and the rest of the file still loads. Saving
//! always rewrites the whole file.

use std::{
    fmt::Display,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use csv::StringRecord;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use lineup_core::{
    application::{ApplicationError, ports::RosterStore},
    domain::{PlayerRecord, Position},
    error::{LineupError, LineupResult},
};

const FIELD_COUNT: usize = 4;

/// A line that was left out of a load, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: u64,
    pub reason: String,
}

/// Everything a load produced, including what it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub players: Vec<PlayerRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// On-disk shape of one record.
#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    position: Position,
    at_bats: u32,
    hits: u32,
}

impl<'a> From<&'a PlayerRecord> for CsvRow<'a> {
    fn from(player: &'a PlayerRecord) -> Self {
        Self {
            name: player.name(),
            position: player.position(),
            at_bats: player.at_bats(),
            hits: player.hits(),
        }
    }
}

/// Production store backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    /// Create a store for `path`. Nothing is touched until the first load/save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every valid line and describe every skipped one.
    ///
    /// A missing file yields an empty report. Any other failure to open or
    /// read the file is a [`ApplicationError::LoadFailed`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_with_report(&self) -> LineupResult<LoadReport> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No lineup file yet, starting empty");
                return Ok(LoadReport::default());
            }
            Err(e) => return Err(self.load_error(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut report = LoadReport::default();

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        return Err(self.load_error(e));
                    }
                    let line = e.position().map_or(0, |p| p.line());
                    report.skip(line, e.to_string());
                    continue;
                }
            };

            // Whitespace-only lines trim down to a single empty field.
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }

            let line = record.position().map_or(0, |p| p.line());
            match parse_row(&record) {
                Ok(player) => report.players.push(player),
                Err(reason) => report.skip(line, reason),
            }
        }

        debug!(
            players = report.players.len(),
            skipped = report.skipped.len(),
            "Lineup file read"
        );
        Ok(report)
    }

    fn load_error(&self, e: impl Display) -> LineupError {
        ApplicationError::LoadFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        }
        .into()
    }

    fn save_error(&self, e: impl Display) -> LineupError {
        ApplicationError::SaveFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        }
        .into()
    }
}

impl LoadReport {
    fn skip(&mut self, line: u64, reason: String) {
        warn!(line, %reason, "Skipping malformed lineup line");
        self.skipped.push(SkippedLine { line, reason });
    }
}

impl RosterStore for CsvFileStore {
    fn load(&self) -> LineupResult<Vec<PlayerRecord>> {
        Ok(self.load_with_report()?.players)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), players = players.len()))]
    fn save(&self, players: &[PlayerRecord]) -> LineupResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.save_error(e))?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.save_error(e))?;

        for player in players {
            writer
                .serialize(CsvRow::from(player))
                .map_err(|e| self.save_error(e))?;
        }
        writer.flush().map_err(|e| self.save_error(e))?;

        debug!("Lineup file written");
        Ok(())
    }
}

/// Turn one CSV record into a validated player, or say why it can't be.
fn parse_row(record: &StringRecord) -> Result<PlayerRecord, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        ));
    }

    let position: Position = record[1].parse().map_err(|e| format!("{e}"))?;
    let at_bats = parse_count(&record[2], "at bats")?;
    let hits = parse_count(&record[3], "hits")?;

    PlayerRecord::new(&record[0], position, at_bats, hits).map_err(|e| e.to_string())
}

fn parse_count(raw: &str, field: &str) -> Result<i64, String> {
    raw.parse()
        .map_err(|_| format!("{field} '{raw}' is not an integer"))
}
