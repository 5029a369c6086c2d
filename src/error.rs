//! Error Types
//!
//! Field-keyed validation messages and command failures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation messages keyed by form field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop the message for a field, e.g. once the user edits it
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when no field failed
    pub fn into_result(self) -> Result<(), CommandError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CommandError::Validation(self))
        }
    }
}

/// Why a mock command was refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("please fix {} highlighted field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidState(String),
    #[error("promo code \"{0}\" is not valid")]
    InvalidPromoCode(String),
}

impl CommandError {
    /// Field messages to render next to inputs, empty for non-validation errors
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            CommandError::Validation(errors) => errors.clone(),
            _ => FieldErrors::new(),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is required");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "please fix 1 highlighted field(s)");
        assert_eq!(err.field_errors().get("email"), Some("Email is required"));
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = FieldErrors::new();
        errors.insert("firstName", "First name is required");
        errors.insert("lastName", "Last name is required");
        errors.clear("firstName");
        assert!(!errors.has("firstName"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CommandError::NotFound("order 9".into()).to_string(), "order 9 not found");
        assert_eq!(
            CommandError::InvalidPromoCode("FREE".into()).to_string(),
            "promo code \"FREE\" is not valid"
        );
    }
}
