use super::render;
use crate::{
    api::ApiClient,
    config::ClientConfig,
    flows::register::{RegisterFlow, RegistrationRequest},
};
use anyhow::{bail, Result};
use std::io::{self, Write};

#[derive(Debug)]
pub struct Args {
    pub config: ClientConfig,
    pub request: RegistrationRequest,
}

/// Execute the register action.
/// # Errors
/// Returns an error if the form is invalid or the service refuses the registration.
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(args.config)?;
    run(&client, &args.request, &mut io::stdout()).await
}

pub(crate) async fn run<W: Write>(
    client: &ApiClient,
    request: &RegistrationRequest,
    out: &mut W,
) -> Result<()> {
    let mut flow = RegisterFlow::new();
    let outcome = flow.submit(client, request).await;

    if !flow.field_errors().is_empty() {
        for error in flow.field_errors() {
            writeln!(out, "{}: {}", error.field.as_str(), error.message)?;
        }
        bail!("registration form is invalid");
    }

    render::outcome(out, &outcome)?;
    if outcome.is_error() {
        bail!("registration failed");
    }
    if let Some(route) = &outcome.navigate {
        render::next_step(out, route)?;
    }

    Ok(())
}
