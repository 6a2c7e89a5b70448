use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use tracing::Level;

/// Level for the stderr log. Without `-v` only the telemetry default
/// (`error`, or `RUST_LOG`) applies.
const fn log_level(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Reads the `billbharat` command line, installs logging and turns the
/// chosen subcommand into the onboarding [`Action`] to run.
///
/// # Errors
///
/// Fails when the log subscriber cannot be installed or the subcommand's
/// arguments do not form a valid action (for example a bad `--api-url`).
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);

    telemetry::init(log_level(verbosity))?;

    dispatch::handler(&matches)
}
