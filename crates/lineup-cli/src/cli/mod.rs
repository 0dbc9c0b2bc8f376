//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lineup",
    bin_name = "lineup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26be} Baseball lineup manager",
    long_about = "Keep a batting order in a flat CSV file. Run without a \
                  subcommand for the interactive menu, or use a subcommand \
                  for a single change.",
    after_help = "EXAMPLES:\n\
        \x20 lineup\n\
        \x20 lineup add \"Alice Smith\" --position SS --at-bats 10 --hits 3\n\
        \x20 lineup move 1 4\n\
        \x20 lineup show --format json",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive menu.
    #[command(visible_alias = "m", about = "Interactive lineup menu")]
    Menu,

    /// Print the lineup.
    #[command(
        visible_alias = "ls",
        about = "Display the lineup",
        after_help = "EXAMPLES:\n\
            \x20 lineup show\n\
            \x20 lineup show --format csv"
    )]
    Show(ShowArgs),

    /// Add a player at the end of the batting order.
    #[command(
        about = "Add a player",
        after_help = "EXAMPLES:\n\
            \x20 lineup add \"Alice Smith\" --position SS --at-bats 10 --hits 3\n\
            \x20 lineup add Bob -p P"
    )]
    Add(AddArgs),

    /// Remove a player by lineup number.
    #[command(visible_alias = "rm", about = "Remove a player")]
    Remove(SlotArgs),

    /// Move a player to a new lineup number.
    #[command(
        visible_alias = "mv",
        about = "Move a player",
        after_help = "The player is taken out first and then inserted so they bat in TO.\n\n\
            EXAMPLES:\n\
            \x20 lineup move 1 4   # leadoff hitter now bats fourth"
    )]
    Move(MoveArgs),

    /// Change a player's position.
    #[command(about = "Edit a player's position")]
    EditPosition(EditPositionArgs),

    /// Change a player's at bats and hits.
    #[command(about = "Edit a player's stats")]
    EditStats(EditStatsArgs),

    /// Load the lineup file and report lines that could not be read.
    #[command(about = "Check the lineup file")]
    Check,

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 lineup init\n\
            \x20 lineup init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lineup completions bash > ~/.local/share/bash-completion/completions/lineup\n\
            \x20 lineup completions zsh  > ~/.zfunc/_lineup"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 lineup config get storage.data_file\n\
            \x20 lineup config list"
    )]
    Config(ConfigCommands),
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `lineup show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ShowFormat,
}

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
    /// CSV rows with a header.
    Csv,
}

// ── edits ─────────────────────────────────────────────────────────────────────

/// Arguments for `lineup add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Player name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Position code (C, 1B, 2B, 3B, SS, LF, CF, RF, P).
    #[arg(short = 'p', long = "position", value_name = "POS")]
    pub position: String,

    /// At bats.
    #[arg(
        short = 'a',
        long = "at-bats",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true,
    )]
    pub at_bats: i64,

    /// Hits.
    #[arg(
        short = 'H',
        long = "hits",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true,
    )]
    pub hits: i64,
}

/// A single lineup number.
#[derive(Debug, Args)]
pub struct SlotArgs {
    /// Lineup number, starting at 1.
    #[arg(value_name = "SLOT")]
    pub slot: usize,
}

/// Arguments for `lineup move`.
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Current lineup number.
    #[arg(value_name = "FROM")]
    pub from: usize,

    /// New lineup number.
    #[arg(value_name = "TO")]
    pub to: usize,
}

/// Arguments for `lineup edit-position`.
#[derive(Debug, Args)]
pub struct EditPositionArgs {
    /// Lineup number.
    #[arg(value_name = "SLOT")]
    pub slot: usize,

    /// New position code.
    #[arg(value_name = "POS")]
    pub position: String,
}

/// Arguments for `lineup edit-stats`.
#[derive(Debug, Args)]
pub struct EditStatsArgs {
    /// Lineup number.
    #[arg(value_name = "SLOT")]
    pub slot: usize,

    /// New at bats.
    #[arg(
        short = 'a',
        long = "at-bats",
        value_name = "N",
        allow_negative_numbers = true,
    )]
    pub at_bats: i64,

    /// New hits.
    #[arg(
        short = 'H',
        long = "hits",
        value_name = "N",
        allow_negative_numbers = true,
    )]
    pub hits: i64,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lineup init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lineup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `lineup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
