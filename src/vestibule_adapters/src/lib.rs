pub mod auth_validation;
pub mod authentication;
pub mod config;
pub mod handlers;
pub mod hashing;
pub mod persistence;
pub mod serialization;

#[cfg(test)]
pub(crate) mod test_support;
