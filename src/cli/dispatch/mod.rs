use crate::{
    cli::{
        actions::{
            business::{self, Choice, Credentials},
            login, register, verify, Action,
        },
        commands::{
            self, businesses as businesses_cmd, register as register_cmd, verify as verify_cmd,
        },
    },
    config::{ClientConfig, DEFAULT_TIMEOUT_SECONDS},
    flows::{register::RegistrationRequest, verify::VerificationChannel},
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    string(matches, id).with_context(|| format!("missing required argument: --{id}"))
}

fn secret(matches: &ArgMatches, id: &str) -> Option<SecretString> {
    string(matches, id).map(SecretString::from)
}

fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    let api_url = required(matches, commands::ARG_API_URL)?;
    let timeout = matches
        .get_one::<u64>(commands::ARG_TIMEOUT)
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

    ClientConfig::new(&api_url, timeout).context("invalid client configuration")
}

/// # Errors
/// Returns an error if the client configuration is invalid or required
/// arguments are missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let config = client_config(matches)?;

    match matches.subcommand() {
        Some((register_cmd::NAME, sub)) => {
            let password = secret(sub, commands::ARG_PASSWORD)
                .context("missing required argument: --password")?;
            Ok(Action::Register(register::Args {
                config,
                request: RegistrationRequest::new(
                    required(sub, register_cmd::ARG_NAME)?,
                    required(sub, commands::ARG_EMAIL)?,
                    required(sub, register_cmd::ARG_COUNTRY_CODE)?,
                    required(sub, register_cmd::ARG_PHONE)?,
                    password,
                ),
            }))
        }
        Some((verify_cmd::NAME, sub)) => {
            let channel = match sub.get_one::<String>(verify_cmd::ARG_CHANNEL) {
                Some(value) => value
                    .parse::<VerificationChannel>()
                    .map_err(|err| anyhow!(err))?,
                None => VerificationChannel::default(),
            };
            Ok(Action::Verify(verify::Args {
                config,
                email: string(sub, commands::ARG_EMAIL),
                channel,
                send: sub.get_flag(verify_cmd::ARG_SEND),
                code: string(sub, verify_cmd::ARG_CODE),
            }))
        }
        Some((commands::login::NAME, sub)) => Ok(Action::Login(login::Args {
            config,
            email: required(sub, commands::ARG_EMAIL)?,
            password: secret(sub, commands::ARG_PASSWORD)
                .context("missing required argument: --password")?,
            print_token: sub.get_flag(commands::ARG_PRINT_TOKEN),
        })),
        Some((businesses_cmd::NAME, sub)) => {
            let credentials = credentials(sub)?;
            let choice = if sub.get_flag(businesses_cmd::ARG_CREATE) {
                Choice::Create
            } else if let Some(id) = string(sub, businesses_cmd::ARG_SELECT) {
                Choice::Select(id)
            } else {
                Choice::Prompt
            };
            Ok(Action::Businesses(business::Args {
                config,
                credentials,
                choice,
                print_token: sub.get_flag(commands::ARG_PRINT_TOKEN),
            }))
        }
        Some((other, _)) => Err(anyhow!("unknown command: {other}")),
        None => Err(anyhow!("no command given, see --help")),
    }
}

// An access token wins over email and password.
fn credentials(matches: &ArgMatches) -> Result<Credentials> {
    if let Some(token) = string(matches, businesses_cmd::ARG_ACCESS_TOKEN)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
    {
        return Ok(Credentials::AccessToken(SecretString::from(token)));
    }

    match (
        string(matches, commands::ARG_EMAIL),
        secret(matches, commands::ARG_PASSWORD),
    ) {
        (Some(email), Some(password)) => Ok(Credentials::Password { email, password }),
        _ => Err(anyhow!(
            "authentication required: pass --access-token, or --email and --password"
        )),
    }
}
