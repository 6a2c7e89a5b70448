use super::email_arg;
use clap::{Arg, ArgAction, Command};

pub const NAME: &str = "verify";
pub const ARG_CHANNEL: &str = "channel";
pub const ARG_SEND: &str = "send";
pub const ARG_CODE: &str = "code";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Verify the email and phone of a registered account")
        .long_about(
            "Verify the email and phone of a registered account.\n\n\
             With --send or --code the actions run once for --channel. Otherwise an \
             interactive prompt accepts: email, phone, send, a 6-digit code, quit.",
        )
        .arg(email_arg())
        .arg(
            Arg::new(ARG_CHANNEL)
                .long("channel")
                .help("Channel to act on")
                .value_parser(["email", "phone"])
                .default_value("email"),
        )
        .arg(
            Arg::new(ARG_SEND)
                .long("send")
                .help("Request a new code for the channel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_CODE)
                .long("code")
                .help("Submit this 6-digit code for the channel"),
        )
}
