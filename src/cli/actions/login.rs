use super::render;
use crate::{
    api::{ApiClient, Session},
    config::ClientConfig,
    flows::{login::LoginFlow, Route},
};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};

#[derive(Debug)]
pub struct Args {
    pub config: ClientConfig,
    pub email: String,
    pub password: SecretString,
    pub print_token: bool,
}

/// Execute the login action.
/// # Errors
/// Returns an error if the credentials are rejected or the service is unreachable.
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(args.config)?;
    let mut out = io::stdout();

    let (session, next) = sign_in(&client, &args.email, &args.password, &mut out).await?;

    if args.print_token {
        writeln!(out, "{}", session.access_token().expose_secret())?;
    } else if let Some(route) = next {
        render::next_step(&mut out, &route)?;
    }

    Ok(())
}

/// Runs the login flow and returns the session it produced along with the
/// route the flow navigates to.
pub(crate) async fn sign_in<W: Write>(
    client: &ApiClient,
    email: &str,
    password: &SecretString,
    out: &mut W,
) -> Result<(Session, Option<Route>)> {
    let mut flow = LoginFlow::new();
    let result = flow.submit(client, email, password).await;
    render::outcome(out, &result.outcome)?;

    match result.session {
        Some(session) => Ok((session, result.outcome.navigate)),
        None => bail!("login failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn password(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[tokio::test]
    async fn sign_in_returns_session_and_next_route() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "jane@x.com", "password": "password123"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "data": {"access_token": "acc-1", "refresh_token": "ref-1"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(ClientConfig::new(&server.uri(), 5)?)?;
        let mut out = Vec::new();
        let (session, next) =
            sign_in(&client, "jane@x.com", &password("password123"), &mut out).await?;

        assert_eq!(session.access_token().expose_secret(), "acc-1");
        assert_eq!(next, Some(Route::SelectBusiness));
        assert_eq!(String::from_utf8(out)?, "[ok] Login successful\n");
        Ok(())
    }

    #[tokio::test]
    async fn rejected_credentials_are_an_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"message": "invalid credentials"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(ClientConfig::new(&server.uri(), 5)?)?;
        let mut out = Vec::new();
        let result = sign_in(&client, "jane@x.com", &password("wrong-pass"), &mut out).await;

        assert!(result.is_err());
        assert_eq!(String::from_utf8(out)?, "[error] invalid credentials\n");
        Ok(())
    }
}
