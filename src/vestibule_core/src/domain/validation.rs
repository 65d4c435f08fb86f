//! Ordered accumulation of validation failures.
//!
//! Errors are kept in the order they were added. `full_messages` renders each
//! one prefixed with the attribute's human name, except for `Attribute::Base`
//! whose messages stand on their own.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Errors that belong to the record as a whole.
    Base,
    Email,
    Password,
    PasswordConfirmation,
}

impl Attribute {
    pub fn human_name(self) -> &'static str {
        match self {
            Attribute::Base => "",
            Attribute::Email => "Email",
            Attribute::Password => "Password",
            Attribute::PasswordConfirmation => "Password confirmation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub attribute: Attribute,
    pub message: String,
}

impl FieldError {
    pub fn full_message(&self) -> String {
        match self.attribute {
            Attribute::Base => self.message.clone(),
            attribute => format!("{} {}", attribute.human_name(), self.message),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: Attribute, message: impl Into<String>) {
        self.errors.push(FieldError {
            attribute,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::full_message).collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
