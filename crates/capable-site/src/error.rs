//! Error types for the site library.

use thiserror::Error;
use ulid::Ulid;

use crate::contact::FormField;

/// Loading or validating `site.toml` failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// A contact or newsletter form refused an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required fields are empty: {}", field_labels(.0))]
    MissingRequired(Vec<FormField>),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("the form has already been submitted")]
    AlreadySubmitted,

    #[error("no pending submission matches receipt {0}")]
    NoPendingSubmission(Ulid),
}

impl FormError {
    /// The visitor can fix this by editing the form.
    pub fn needs_input(&self) -> bool {
        matches!(self, Self::MissingRequired(_) | Self::InvalidEmail(_))
    }
}

fn field_labels(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown portfolio category '{0}'")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page section '{0}'")]
pub struct UnknownSection(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_lists_labels_in_order() {
        let error = FormError::MissingRequired(vec![FormField::Name, FormField::Message]);
        assert_eq!(
            error.to_string(),
            "required fields are empty: Full Name, Project Details"
        );
    }

    #[test]
    fn only_form_content_errors_need_input() {
        assert!(FormError::MissingRequired(vec![FormField::Email]).needs_input());
        assert!(FormError::InvalidEmail("nope".into()).needs_input());
        assert!(!FormError::AlreadySubmitting.needs_input());
        assert!(!FormError::AlreadySubmitted.needs_input());
    }
}
