use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

// One `@`, no whitespace, something on either side.
static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email format regex is valid"));

/// Reasons an email address is rejected.
///
/// The messages are relative to the attribute, so they read as
/// `"Email can't be blank"` once rendered through `ValidationErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("can't be blank")]
    Blank,
    #[error("is invalid")]
    Invalid,
}

/// A normalised email address.
///
/// Surrounding whitespace is stripped and the address is lower-cased, so two
/// addresses differing only in case compare equal.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = Self::normalize(value.expose_secret());

        if normalized.is_empty() {
            return Err(EmailError::Blank);
        }
        if !EMAIL_FORMAT.is_match(&normalized) {
            return Err(EmailError::Invalid);
        }

        Ok(Self(Secret::new(normalized)))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
