//! # BillBharat onboarding client
//!
//! `billbharat` drives the account onboarding flows of the BillBharat auth
//! service from the client side: registration, one-time-code verification of
//! the email and phone channels, and selection of the business the session
//! should operate under.
//!
//! ## Layers
//!
//! - [`api`]: typed wrappers over the auth service REST endpoints. Every
//!   authenticated call takes an explicit [`api::Session`]; the HTTP client
//!   keeps no cookie store.
//! - [`flows`]: one state machine per screen. Flows validate input locally,
//!   call the API, and fold every failure into an [`flows::Outcome`] carrying
//!   a user-facing notice and an optional navigation target.
//! - [`cli`]: the `billbharat` terminal front end that runs the flows.
//!
//! ## Onboarding sequence
//!
//! 1. **Register:** `POST /auth/register`, then navigate to
//!    `/verify?email=<email>`.
//! 2. **Verify:** request and submit a 6-digit code per channel
//!    (`/auth/send-*-verification-request`, `/auth/verify-*`).
//! 3. **Login:** `POST /auth/login` returns the session tokens.
//! 4. **Select business:** `GET /businesses/list`, then
//!    `POST /businesses/select/:id` issues a session scoped to that business.
//!
//! Passwords and tokens are held in `secrecy` wrappers and never logged.

pub mod api;
pub mod cli;
pub mod config;
pub mod flows;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
