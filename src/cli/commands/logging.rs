//! `-v/--verbose`, shared by every subcommand. Logs go to stderr so that
//! prompts and notices on stdout stay readable during the onboarding loops.

use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Environment fallback for the log verbosity, e.g. `BILLBHARAT_LOG_LEVEL=debug`.
pub const LOG_LEVEL_ENV: &str = "BILLBHARAT_LOG_LEVEL";

const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a level name (any case) or a repeat count from 0 to 5.
///
/// # Errors
///
/// Returns a message listing the accepted names when `value` matches none.
pub fn parse_log_level(value: &str) -> Result<u8, String> {
    let value = value.trim();
    if let Ok(count) = value.parse::<u8>() {
        return if count <= 5 {
            Ok(count)
        } else {
            Err(format!("verbosity count {count} is above 5"))
        };
    }

    LEVEL_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(value))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "unknown log level '{value}', expected one of: {}",
                LEVEL_NAMES.join(", ")
            )
        })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log API calls and flow decisions to stderr; repeat for more (-v warn .. -vvvv trace)")
            .env(LOG_LEVEL_ENV)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(ValueParser::new(parse_log_level)),
    )
}
