use super::{login, render};
use crate::{
    api::{ApiClient, Session},
    config::ClientConfig,
    flows::{business::BusinessSelectFlow, Route},
};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[derive(Debug)]
pub enum Credentials {
    AccessToken(SecretString),
    Password { email: String, password: SecretString },
}

/// What to do once the list is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Select(String),
    Create,
    Prompt,
}

#[derive(Debug)]
pub struct Args {
    pub config: ClientConfig,
    pub credentials: Credentials,
    pub choice: Choice,
    pub print_token: bool,
}

/// Execute the businesses action.
/// # Errors
/// Returns an error if authentication fails, the list cannot be loaded, or a
/// non-interactive selection is refused.
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(args.config)?;
    let mut out = io::stdout();

    let session = match args.credentials {
        Credentials::AccessToken(token) => Session::new(token, None),
        Credentials::Password { email, password } => {
            login::sign_in(&client, &email, &password, &mut out).await?.0
        }
    };

    let mut flow = BusinessSelectFlow::new(session);
    let input = BufReader::new(tokio::io::stdin());
    let selected = run(&mut flow, &client, args.choice, input, &mut out).await?;

    if selected && args.print_token {
        writeln!(out, "{}", flow.session().access_token().expose_secret())?;
    }

    Ok(())
}

/// Loads the list and applies `choice`. Returns whether a business was
/// selected.
pub(crate) async fn run<R, W>(
    flow: &mut BusinessSelectFlow,
    client: &ApiClient,
    choice: Choice,
    input: R,
    out: &mut W,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let outcome = flow.load(client).await;
    render::outcome(out, &outcome)?;

    if outcome.navigate == Some(Route::Login) {
        writeln!(out, "Your session is no longer valid. Sign in again.")?;
        render::next_step(out, &Route::Login)?;
        bail!("session rejected by the service");
    }
    if outcome.is_error() {
        bail!("could not load businesses");
    }

    match choice {
        Choice::Create => {
            render::outcome(out, &flow.create_business())?;
            Ok(false)
        }
        Choice::Select(id) => {
            let outcome = flow.select(client, &id).await;
            render::outcome(out, &outcome)?;
            if outcome.is_error() {
                bail!("could not select business {id}");
            }
            Ok(true)
        }
        Choice::Prompt => prompt(flow, client, input, out).await,
    }
}

async fn prompt<R, W>(
    flow: &mut BusinessSelectFlow,
    client: &ApiClient,
    input: R,
    out: &mut W,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render::businesses(out, flow.view())?;

    let count = flow.businesses().len();
    let mut lines = input.lines();
    loop {
        if count == 0 {
            write!(out, "n to create a business, q to quit > ")?;
        } else {
            write!(out, "Select a business [1-{count}], n to create, q to quit > ")?;
        }
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(false);
        };

        match line.trim() {
            "" => {}
            "q" | "quit" => return Ok(false),
            "n" => render::outcome(out, &flow.create_business())?,
            entry => {
                let id = entry
                    .parse::<usize>()
                    .ok()
                    .and_then(|number| number.checked_sub(1))
                    .and_then(|index| flow.businesses().get(index))
                    .map(|business| business.id.clone());

                let Some(id) = id else {
                    writeln!(out, "no entry {entry}")?;
                    continue;
                };

                let outcome = flow.select(client, &id).await;
                render::outcome(out, &outcome)?;
                if outcome.navigate == Some(Route::Home) {
                    return Ok(true);
                }
            }
        }
    }
}
