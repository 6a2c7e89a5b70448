//! Business selection. Lists the businesses of the signed-in user and
//! switches the session to the chosen one.
//!
//! Only a 401 on the list call is treated as an expired session; other
//! failure statuses are logged and leave the (empty) list on screen. The
//! list status is judged without reading the error body, while a selection
//! needs a JSON body to report anything but the generic failure.

use super::{message_or, Notice, Outcome, Route};
use crate::api::{ApiClient, Business, Session};
use secrecy::SecretString;
use tracing::{error, info, warn};

pub const EMPTY_STATE: &str = "No businesses found. Create one to get started.";

/// What the screen shows.
#[derive(Debug, PartialEq, Eq)]
pub enum BusinessView<'a> {
    Loading,
    Empty(&'static str),
    Entries(&'a [Business]),
}

#[derive(Debug)]
pub struct BusinessSelectFlow {
    session: Session,
    businesses: Vec<Business>,
    loading: bool,
    selecting: bool,
}

impl BusinessSelectFlow {
    /// Starts in the loading state; call [`load`](Self::load) next.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            businesses: Vec::new(),
            loading: true,
            selecting: false,
        }
    }

    /// The current session. Replaced by the business-scoped one after a
    /// successful selection.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    #[must_use]
    pub fn view(&self) -> BusinessView<'_> {
        if self.loading {
            BusinessView::Loading
        } else if self.businesses.is_empty() {
            BusinessView::Empty(EMPTY_STATE)
        } else {
            BusinessView::Entries(&self.businesses)
        }
    }

    /// Fetches the list. A 401 navigates to login.
    pub async fn load(&mut self, client: &ApiClient) -> Outcome {
        self.loading = true;
        let result = client.list_businesses(&self.session).await;
        self.loading = false;

        match result {
            Ok(businesses) => {
                info!(count = businesses.len(), "businesses loaded");
                self.businesses = businesses;
                Outcome::default()
            }
            Err(err) if err.is_unauthorized() => {
                warn!("session rejected while listing businesses");
                self.businesses.clear();
                Outcome::default().navigate_to(Route::Login)
            }
            Err(err) if err.status().is_some() => {
                error!(error = %err, "failed to fetch businesses");
                self.businesses.clear();
                Outcome::default()
            }
            Err(err) => {
                error!(error = %err, "business list request failed");
                Outcome::with_notice(Notice::error("Failed to load businesses"))
            }
        }
    }

    /// Switches the session to `business_id` and navigates home on success.
    pub async fn select(&mut self, client: &ApiClient, business_id: &str) -> Outcome {
        self.selecting = true;
        let result = client.select_business(&self.session, business_id).await;
        self.selecting = false;

        match result {
            Ok(response) => {
                info!(business_id, "business selected");
                if let Some(tokens) = response
                    .data
                    .filter(|tokens| !tokens.access_token.trim().is_empty())
                {
                    self.session = Session::new(
                        SecretString::from(tokens.access_token),
                        tokens.refresh_token.map(SecretString::from),
                    );
                }
                Outcome::with_notice(Notice::success("Business selected")).navigate_to(Route::Home)
            }
            Err(err) if err.is_http() => {
                warn!(business_id, error = %err, "business selection refused");
                Outcome::with_notice(Notice::error(message_or(
                    err.server_message(),
                    "Failed to select business",
                )))
            }
            Err(err) => {
                error!(business_id, error = %err, "business selection request failed");
                Outcome::with_notice(Notice::error("Something went wrong"))
            }
        }
    }

    /// Business creation is not available yet; nothing is sent.
    #[must_use]
    pub fn create_business(&self) -> Outcome {
        Outcome::with_notice(Notice::info("Create business functionality coming soon"))
    }
}
