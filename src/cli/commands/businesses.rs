use super::{email_arg, password_arg, print_token_arg};
use clap::{Arg, ArgAction, Command};

pub const NAME: &str = "businesses";
pub const ARG_ACCESS_TOKEN: &str = "access-token";
pub const ARG_SELECT: &str = "select";
pub const ARG_CREATE: &str = "create";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("List your businesses and switch the session to one of them")
        .long_about(
            "List your businesses and switch the session to one of them.\n\n\
             Authenticates with --access-token, or signs in with --email and --password. \
             Without --select an interactive prompt accepts an entry number, n to create \
             a business, or q to quit.",
        )
        .arg(
            Arg::new(ARG_ACCESS_TOKEN)
                .long("access-token")
                .help("Access token from a previous login")
                .env("BILLBHARAT_ACCESS_TOKEN")
                .hide_env_values(true),
        )
        .arg(email_arg())
        .arg(password_arg())
        .arg(
            Arg::new(ARG_SELECT)
                .long("select")
                .help("Business id to switch to")
                .conflicts_with(ARG_CREATE),
        )
        .arg(
            Arg::new(ARG_CREATE)
                .long("create")
                .help("Create a new business")
                .action(ArgAction::SetTrue),
        )
        .arg(print_token_arg())
}
