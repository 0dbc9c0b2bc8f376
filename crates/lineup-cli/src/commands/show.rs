//! `lineup show`: print the lineup and exit.

use std::io;

use serde::Serialize;

use lineup_core::domain::Roster;

use crate::{
    cli::{GlobalArgs, ShowArgs, ShowFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, render_table},
};

/// One row of machine-readable output.
#[derive(Debug, Serialize)]
struct LineupRow<'a> {
    slot: usize,
    name: &'a str,
    position: &'static str,
    at_bats: u32,
    hits: u32,
    average: String,
}

pub fn execute(
    args: ShowArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = super::open_service(global, config)?;
    let text = render(service.roster(), args.format)?;
    output.data(&text)?;
    Ok(())
}

fn render(roster: &Roster, format: ShowFormat) -> CliResult<String> {
    match format {
        ShowFormat::Table => Ok(render_table(roster)),
        ShowFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rows(roster))
                .map_err(|e| serialise_error(e.into()))?;
            json.push('\n');
            Ok(json)
        }
        ShowFormat::Csv => render_csv(roster),
    }
}

fn rows(roster: &Roster) -> Vec<LineupRow<'_>> {
    roster
        .iter()
        .map(|(slot, player)| LineupRow {
            slot,
            name: player.name(),
            position: player.position().code(),
            at_bats: player.at_bats(),
            hits: player.hits(),
            average: format!("{:.3}", player.batting_average()),
        })
        .collect()
}

fn render_csv(roster: &Roster) -> CliResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows(roster) {
        writer.serialize(row).map_err(|e| serialise_error(e.into()))?;
    }
    // An empty lineup still gets its header.
    if roster.is_empty() {
        writer
            .write_record(["slot", "name", "position", "at_bats", "hits", "average"])
            .map_err(|e| serialise_error(e.into()))?;
    }

    let bytes = writer.into_inner().map_err(|e| CliError::IoError {
        message: "Failed to flush CSV output".into(),
        source: e.into_error(),
    })?;
    String::from_utf8(bytes).map_err(|e| serialise_error(io::Error::other(e)))
}

fn serialise_error(source: io::Error) -> CliError {
    CliError::IoError {
        message: "Failed to serialise lineup".into(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::domain::{PlayerRecord, Position};

    fn roster() -> Roster {
        Roster::from_records(vec![
            PlayerRecord::new("Smith, Jr.", Position::CenterField, 22, 7).unwrap(),
            PlayerRecord::new("Bob", Position::Pitcher, 0, 0).unwrap(),
        ])
    }

    #[test]
    fn csv_has_header_and_quotes_names() {
        let text = render(&roster(), ShowFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "slot,name,position,at_bats,hits,average");
        assert_eq!(lines[1], "1,\"Smith, Jr.\",CF,22,7,0.318");
        assert_eq!(lines[2], "2,Bob,P,0,0,0.000");
    }

    #[test]
    fn empty_csv_is_just_the_header() {
        let text = render(&Roster::new(), ShowFormat::Csv).unwrap();
        assert_eq!(text, "slot,name,position,at_bats,hits,average\n");
    }

    #[test]
    fn json_is_an_array_of_rows() {
        let text = render(&roster(), ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["name"], "Smith, Jr.");
        assert_eq!(value[0]["position"], "CF");
        assert_eq!(value[1]["slot"], 2);
        assert_eq!(value[0]["average"], "0.318");
    }

    #[test]
    fn table_matches_menu_display() {
        let roster = roster();
        assert_eq!(render(&roster, ShowFormat::Table).unwrap(), render_table(&roster));
    }
}
