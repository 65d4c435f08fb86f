use secrecy::Secret;

use super::{user::User, validation::ValidationErrors};

/// Raw signup input, before any validation. Missing fields arrive as empty strings.
#[derive(Debug, Clone)]
pub struct SignupCredentials {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub password_confirmation: Option<Secret<String>>,
}

/// Result of a signup attempt as reported by an `IdentityProvider`.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// The account was created and stored.
    Persisted(User),
    /// Nothing was stored; the errors explain why.
    Rejected(ValidationErrors),
}

impl SignupOutcome {
    pub fn persisted(&self) -> bool {
        matches!(self, SignupOutcome::Persisted(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SignupOutcome::Persisted(user) => Some(user),
            SignupOutcome::Rejected(_) => None,
        }
    }

    /// Human readable messages in the order the provider produced them.
    /// Empty for a persisted outcome.
    pub fn errors(&self) -> Vec<String> {
        match self {
            SignupOutcome::Persisted(_) => Vec::new(),
            SignupOutcome::Rejected(errors) => errors.full_messages(),
        }
    }
}
