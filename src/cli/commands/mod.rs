pub mod businesses;
pub mod login;
pub mod logging;
pub mod register;
pub mod verify;

use crate::config::DEFAULT_API_BASE_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_PRINT_TOKEN: &str = "print-token";

pub(crate) fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .long("email")
        .help("Account email")
        .env("BILLBHARAT_EMAIL")
}

pub(crate) fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("BILLBHARAT_PASSWORD")
        .hide_env_values(true)
}

pub(crate) fn print_token_arg() -> Arg {
    Arg::new(ARG_PRINT_TOKEN)
        .long("print-token")
        .help("Print the resulting access token to stdout")
        .action(ArgAction::SetTrue)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let commit = crate::GIT_COMMIT_HASH;
    let long_version: &'static str = Box::leak(
        format!(
            "{} - {}",
            env!("CARGO_PKG_VERSION"),
            commit.get(..7).unwrap_or(commit)
        )
        .into_boxed_str(),
    );

    let command = Command::new("billbharat")
        .about("BillBharat account onboarding")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the auth service")
                .env("BILLBHARAT_API_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds")
                .env("BILLBHARAT_TIMEOUT")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
        .subcommand(register::command())
        .subcommand(verify::command())
        .subcommand(login::command())
        .subcommand(businesses::command());

    logging::with_args(command)
}
