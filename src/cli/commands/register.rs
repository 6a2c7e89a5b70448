use super::{email_arg, password_arg};
use crate::flows::register::DEFAULT_COUNTRY_CODE;
use clap::{Arg, Command};

pub const NAME: &str = "register";
pub const ARG_NAME: &str = "name";
pub const ARG_COUNTRY_CODE: &str = "country-code";
pub const ARG_PHONE: &str = "phone";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Create an account; the email then needs verification")
        .arg(
            Arg::new(ARG_NAME)
                .long("name")
                .help("Full name, 3 to 255 characters")
                .required(true),
        )
        .arg(email_arg().required(true))
        .arg(
            Arg::new(ARG_COUNTRY_CODE)
                .long("country-code")
                .help("Dial code of the phone number")
                .default_value(DEFAULT_COUNTRY_CODE),
        )
        .arg(
            Arg::new(ARG_PHONE)
                .long("phone")
                .help("Phone number, 10 to 16 digits without the dial code")
                .required(true),
        )
        .arg(password_arg().required(true))
}
