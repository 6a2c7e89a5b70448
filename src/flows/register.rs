//! Registration flow. Validates the profile form locally, submits it once,
//! and on success hands the email over to the verification flow.
//!
//! Field rules run before any network call; a form that fails them never
//! leaves the client. Transport and decoding failures are reported with the
//! generic notice and are not retried.

use super::{message_or, Notice, Outcome, Route, GENERIC_FAILURE};
use crate::api::{types::RegisterPayload, ApiClient};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, warn};

/// Dial code preselected in the form.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 255;
const PHONE_MIN: usize = 10;
const PHONE_MAX: usize = 16;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 255;

pub(crate) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

fn valid_dial_code(code: &str) -> bool {
    Regex::new(r"^\+[0-9]{1,4}(?:[ -]?[0-9]{1,4})?$").is_ok_and(|re| re.is_match(code))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    CountryCode,
    Phone,
    Password,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CountryCode => "country_code",
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }
}

/// Inline error shown next to a form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// The registration form as submitted.
#[derive(Clone)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub phone: String,
    password: SecretString,
}

impl RegistrationRequest {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        country_code: impl Into<String>,
        phone: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            country_code: country_code.into(),
            phone: phone.into(),
            password,
        }
    }

    /// Checks every field and returns the first failing rule of each.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name_len = self.name.chars().count();
        if name_len < NAME_MIN {
            errors.push(FieldError::new(
                Field::Name,
                "Name must be at least 3 characters.",
            ));
        } else if name_len > NAME_MAX {
            errors.push(FieldError::new(
                Field::Name,
                "Name must be at most 255 characters.",
            ));
        }

        if !valid_email(&self.email) {
            errors.push(FieldError::new(
                Field::Email,
                "Please enter a valid email address.",
            ));
        }

        if self.country_code.is_empty() {
            errors.push(FieldError::new(
                Field::CountryCode,
                "Country code is required.",
            ));
        } else if !valid_dial_code(&self.country_code) {
            errors.push(FieldError::new(
                Field::CountryCode,
                "Country code must be a dial code such as +91.",
            ));
        }

        let phone_len = self.phone.chars().count();
        if phone_len < PHONE_MIN {
            errors.push(FieldError::new(
                Field::Phone,
                "Phone number must be at least 10 digits.",
            ));
        } else if phone_len > PHONE_MAX {
            errors.push(FieldError::new(
                Field::Phone,
                "Phone number must be at most 16 digits.",
            ));
        } else if !self.phone.chars().all(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new(
                Field::Phone,
                "Phone number must contain only numbers.",
            ));
        }

        let password_len = self.password.expose_secret().chars().count();
        if password_len < PASSWORD_MIN {
            errors.push(FieldError::new(
                Field::Password,
                "Password must be at least 8 characters.",
            ));
        } else if password_len > PASSWORD_MAX {
            errors.push(FieldError::new(
                Field::Password,
                "Password must be at most 255 characters.",
            ));
        }

        errors
    }

    fn payload(&self) -> RegisterPayload<'_> {
        RegisterPayload {
            name: &self.name,
            email: &self.email,
            country_code: &self.country_code,
            phone: &self.phone,
            password: self.password.expose_secret(),
        }
    }
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("country_code", &self.country_code)
            .field("phone", &self.phone)
            .field("password", &"***")
            .finish()
    }
}

/// Registration screen state.
#[derive(Debug, Default)]
pub struct RegisterFlow {
    loading: bool,
    field_errors: Vec<FieldError>,
}

impl RegisterFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Errors from the last submit attempt; empty once the form passed.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Validates and submits the form.
    ///
    /// An invalid form yields an empty outcome and populates
    /// [`field_errors`](Self::field_errors). A successful registration
    /// navigates to verification for the submitted email.
    pub async fn submit(&mut self, client: &ApiClient, request: &RegistrationRequest) -> Outcome {
        self.field_errors = request.validate();
        if !self.field_errors.is_empty() {
            debug!(
                fields = self.field_errors.len(),
                "registration form rejected locally"
            );
            return Outcome::default();
        }

        self.loading = true;
        let result = client.register(&request.payload()).await;
        self.loading = false;

        match result {
            Ok(response) => {
                info!("registration accepted");
                Outcome::with_notice(Notice::success(message_or(
                    response.message.as_deref(),
                    "Registration successful",
                )))
                .navigate_to(Route::verify(&request.email))
            }
            Err(err) if err.is_http() => {
                warn!(error = %err, "registration refused");
                Outcome::with_notice(Notice::error(message_or(
                    err.server_message(),
                    "Registration failed",
                )))
            }
            Err(err) => {
                error!(error = %err, "registration request failed");
                Outcome::with_notice(Notice::error(GENERIC_FAILURE))
            }
        }
    }
}
