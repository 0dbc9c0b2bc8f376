//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use lineup_core::domain::Roster;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Width of every `=` rule.
pub const RULE_WIDTH: usize = 64;

/// A full-width `=` rule.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render the lineup as the fixed-width table used by `show` and the menu.
///
/// ```text
/// ================================================================
/// No  Player              POS   AB    H     AVG
/// ================================================================
/// 1   Alice               SS    10    3     0.300
/// ================================================================
/// ```
pub fn render_table(roster: &Roster) -> String {
    let rule = rule();
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<4}{:<20}{:<6}{:<6}{:<6}{:<6}\n",
        "No", "Player", "POS", "AB", "H", "AVG"
    ));
    out.push_str(&rule);
    out.push('\n');

    for (slot, player) in roster.iter() {
        out.push_str(&format!(
            "{:<4}{:<20}{:<6}{:<6}{:<6}{:<6.3}\n",
            slot,
            player.name(),
            player.position().code(),
            player.at_bats(),
            player.hits(),
            player.batting_average(),
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Data the user asked for (`show`, `config get`); printed even in quiet
    /// mode.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::domain::{PlayerRecord, Position};

    fn make_manager(format: OutputFormat, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            no_color,
            output_format: format,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn roster() -> Roster {
        Roster::from_records(vec![
            PlayerRecord::new("Alice", Position::Shortstop, 10, 3).unwrap(),
            PlayerRecord::new("Bob", Position::Pitcher, 0, 0).unwrap(),
        ])
    }

    #[test]
    fn table_rules_are_64_wide() {
        let table = render_table(&roster());
        let rules: Vec<&str> = table.lines().filter(|l| l.starts_with('=')).collect();
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|r| r.len() == RULE_WIDTH));
    }

    #[test]
    fn table_rows_show_three_decimal_average() {
        let table = render_table(&roster());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1].trim_end(), "No  Player              POS   AB    H     AVG");
        assert_eq!(lines[3].trim_end(), "1   Alice               SS    10    3     0.300");
        assert_eq!(lines[4].trim_end(), "2   Bob                 P     0     0     0.000");
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = render_table(&Roster::new());
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(!make_manager(OutputFormat::Plain, false).supports_color());
        assert!(make_manager(OutputFormat::Human, false).supports_color());
        assert!(!make_manager(OutputFormat::Human, true).supports_color());
    }
}
