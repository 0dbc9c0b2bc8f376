//! Diagnostics for the `lineup` binary.
//!
//! Events from every workspace crate go to stderr, so the lineup table and
//! the menu on stdout stay clean when output is piped. `lineup-core` and
//! `lineup-adapters` only emit events; the subscriber is installed here.
//!
//! Flags map to a level as follows; a set `RUST_LOG` replaces the mapping
//! entirely.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that receive the flag-derived level.
const LINEUP_TARGETS: [&str; 3] = ["lineup", "lineup_core", "lineup_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(args));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install log subscriber: {e}"))?;

    Ok(())
}

fn default_filter(args: &GlobalArgs) -> EnvFilter {
    let level = level_for(args);
    let directives: Vec<String> = LINEUP_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    EnvFilter::new(directives.join(","))
}

/// `--quiet` beats any number of `-v`.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn warnings_only_by_default() {
        assert_eq!(level_for(&flags(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level_for(&flags(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&flags(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&flags(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&flags(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(&flags(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&flags(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn filter_names_every_workspace_crate() {
        let filter = default_filter(&flags(2, false)).to_string();
        for target in LINEUP_TARGETS {
            assert!(
                filter.contains(&format!("{target}=debug")),
                "{target} missing from {filter}"
            );
        }
    }
}
