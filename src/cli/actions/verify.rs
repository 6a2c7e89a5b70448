use super::render;
use crate::{
    api::ApiClient,
    config::ClientConfig,
    flows::{
        verify::{VerificationChannel, VerifyEntry, VerifyFlow},
        Route,
    },
};
use anyhow::{bail, Result};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[derive(Debug)]
pub struct Args {
    pub config: ClientConfig,
    pub email: Option<String>,
    pub channel: VerificationChannel,
    pub send: bool,
    pub code: Option<String>,
}

impl Args {
    fn is_one_shot(&self) -> bool {
        self.send || self.code.is_some()
    }
}

const HELP: &str = "commands: email | phone | send | <6-digit code> | quit";

/// Execute the verify action.
/// # Errors
/// Returns an error if no email is given, or a one-shot send or verify fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(args.config.clone())?;
    let mut out = io::stdout();

    let mut flow = open(args.email.as_deref(), &mut out)?;
    flow.switch_channel(args.channel);

    if args.is_one_shot() {
        once(&mut flow, &client, args.send, args.code.as_deref(), &mut out).await
    } else {
        let input = BufReader::new(tokio::io::stdin());
        interact(&mut flow, &client, input, &mut out).await
    }
}

fn open<W: Write>(email: Option<&str>, out: &mut W) -> Result<VerifyFlow> {
    match VerifyFlow::open(email) {
        VerifyEntry::Ready(flow) => Ok(flow),
        VerifyEntry::Redirect(outcome) => {
            render::outcome(out, &outcome)?;
            if let Some(route) = &outcome.navigate {
                render::next_step(out, route)?;
            }
            bail!("an email is required to verify an account");
        }
    }
}

pub(crate) async fn once<W: Write>(
    flow: &mut VerifyFlow,
    client: &ApiClient,
    send: bool,
    code: Option<&str>,
    out: &mut W,
) -> Result<()> {
    if send {
        let outcome = flow.request_code(client).await;
        render::outcome(out, &outcome)?;
        if outcome.is_error() {
            bail!("could not send a {} verification code", flow.channel());
        }
    }

    if let Some(code) = code {
        flow.enter_code(code);
        let outcome = flow.submit_code(client).await;
        render::outcome(out, &outcome)?;
        if outcome.is_error() {
            bail!("{} verification failed", flow.channel());
        }
    }

    Ok(())
}

fn prompt(flow: &VerifyFlow) -> String {
    let channel = flow.channel();
    if flow.is_verified(channel) {
        format!("{channel} (verified) > ")
    } else {
        format!("{channel} > ")
    }
}

/// Reads commands from `input` until both channels are verified, the user
/// quits, or input ends.
pub(crate) async fn interact<R, W>(
    flow: &mut VerifyFlow,
    client: &ApiClient,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Verifying {}", flow.email())?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", prompt(flow))?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let outcome = match line.trim() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "help" | "?" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            "email" => {
                flow.switch_channel(VerificationChannel::Email);
                continue;
            }
            "phone" => {
                flow.switch_channel(VerificationChannel::Phone);
                continue;
            }
            "send" => flow.request_code(client).await,
            code if code.chars().any(|c| c.is_ascii_digit()) => {
                flow.enter_code(code);
                flow.submit_code(client).await
            }
            other => {
                writeln!(out, "unknown command: {other}")?;
                writeln!(out, "{HELP}")?;
                continue;
            }
        };

        render::outcome(out, &outcome)?;

        if flow.is_fully_verified() {
            writeln!(out, "Email and phone are verified.")?;
            render::next_step(out, &Route::Login)?;
            break;
        }
    }

    Ok(())
}
