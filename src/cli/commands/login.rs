use super::{email_arg, password_arg, print_token_arg};
use clap::Command;

pub const NAME: &str = "login";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Sign in and obtain a session")
        .arg(email_arg().required(true))
        .arg(password_arg().required(true))
        .arg(print_token_arg())
}
