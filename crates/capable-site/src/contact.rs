//! Contact form and newsletter signup state.
//!
//! Submitting does not touch the network: an accepted submission waits
//! `submit_delay_ms`, shows the success panel, then clears itself after
//! `reset_delay_ms`. Each accepted submission gets a receipt so a late timer
//! from an earlier submission can't complete or reset a newer one.

use serde::Serialize;
pub use ulid::Ulid;

use crate::clock::VirtualClock;
use crate::config::ContactConfig;
use crate::content::{BUDGET_RANGES, SERVICE_OPTIONS};
use crate::error::FormError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Budget,
    Timeline,
    Message,
}

/// How a field is edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    /// Pick one of the listed options.
    Choice(&'static [&'static str]),
    Multiline,
}

impl FormField {
    /// Form order.
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Phone,
        FormField::Service,
        FormField::Budget,
        FormField::Timeline,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Company => "Company",
            Self::Phone => "Phone Number",
            Self::Service => "Service Interested In",
            Self::Budget => "Budget Range",
            Self::Timeline => "Project Timeline",
            Self::Message => "Project Details",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@company.com",
            Self::Company => "Your Company",
            Self::Phone => "+1 (555) 123-4567",
            Self::Service => "Select a service",
            Self::Budget => "Select budget range",
            Self::Timeline => "e.g., ASAP, 3 months, Q2 2024",
            Self::Message => "Tell us about your project, goals, and requirements...",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Service | Self::Message)
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Phone => InputKind::Tel,
            Self::Service => InputKind::Choice(&SERVICE_OPTIONS),
            Self::Budget => InputKind::Choice(&BUDGET_RANGES),
            Self::Message => InputKind::Multiline,
            Self::Name | Self::Company | Self::Timeline => InputKind::Text,
        }
    }

    /// Label with the required marker, as rendered above the input.
    pub fn caption(self) -> String {
        if self.is_required() {
            format!("{} *", self.label())
        } else {
            self.label().to_string()
        }
    }
}

/// The value a choice option stores in its field.
pub fn choice_value(option: &str) -> String {
    option.to_lowercase()
}

/// The option a stored choice value came from.
pub fn choice_option(options: &'static [&'static str], value: &str) -> Option<&'static str> {
    options
        .iter()
        .copied()
        .find(|option| choice_value(option) == value)
}

/// Current text of every field. Serializes to the body a future
/// integration would post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Budget => &self.budget,
            FormField::Timeline => &self.timeline,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Phone => &mut self.phone,
            FormField::Service => &mut self.service,
            FormField::Budget => &mut self.budget,
            FormField::Timeline => &mut self.timeline,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Whitespace-only counts as blank.
    pub fn is_blank(&self, field: FormField) -> bool {
        self.get(field).trim().is_empty()
    }
}

/// `local@domain`: exactly one `@`, both sides non-empty, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting {
        receipt: Ulid,
    },
    Submitted {
        receipt: Ulid,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitted { .. })
    }

    /// Returns `false` when the edit was ignored because the success panel
    /// is showing.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            log::debug!("Ignoring edit of {field:?} after submission");
            return false;
        }
        self.fields.set(field, value);
        true
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.fields.is_blank(*field))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired(missing));
        }
        if !is_valid_email(&self.fields.email) {
            return Err(FormError::InvalidEmail(self.fields.email.trim().to_string()));
        }
        Ok(())
    }

    /// Accept the current fields and start the simulated delivery.
    pub fn submit(&mut self) -> Result<Ulid, FormError> {
        match self.phase {
            SubmissionPhase::Submitting { .. } => return Err(FormError::AlreadySubmitting),
            SubmissionPhase::Submitted { .. } => return Err(FormError::AlreadySubmitted),
            SubmissionPhase::Editing => {}
        }
        self.validate()?;
        let receipt = Ulid::new();
        self.phase = SubmissionPhase::Submitting { receipt };
        log::info!("Contact submission {receipt} accepted");
        Ok(receipt)
    }

    pub fn complete_submission(&mut self, receipt: Ulid) -> Result<(), FormError> {
        match self.phase {
            SubmissionPhase::Submitting { receipt: pending } if pending == receipt => {
                self.phase = SubmissionPhase::Submitted { receipt };
                log::info!("Contact submission {receipt} delivered");
                Ok(())
            }
            _ => Err(FormError::NoPendingSubmission(receipt)),
        }
    }

    /// Back to a blank form. Returns `false` for a stale receipt.
    pub fn reset(&mut self, receipt: Ulid) -> bool {
        match self.phase {
            SubmissionPhase::Submitted { receipt: shown } if shown == receipt => {
                *self = Self::default();
                true
            }
            _ => {
                log::debug!("Ignoring stale reset for {receipt}");
                false
            }
        }
    }

    pub fn payload_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }
}

/// A timer step of the simulated delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionEvent {
    Delivered(Ulid),
    ResetDue(Ulid),
}

/// Delays between submit, success and reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTimeline {
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl From<&ContactConfig> for SubmissionTimeline {
    fn from(config: &ContactConfig) -> Self {
        Self {
            submit_delay_ms: u64::from(config.submit_delay_ms),
            reset_delay_ms: u64::from(config.reset_delay_ms),
        }
    }
}

impl Default for SubmissionTimeline {
    fn default() -> Self {
        Self::from(&ContactConfig::default())
    }
}

impl SubmissionTimeline {
    /// The first timer to arm once `receipt` was accepted.
    pub fn first_step(&self, receipt: Ulid) -> (u64, SubmissionEvent) {
        (self.submit_delay_ms, SubmissionEvent::Delivered(receipt))
    }

    pub fn schedule(&self, clock: &mut VirtualClock<SubmissionEvent>, receipt: Ulid) {
        let (delay_ms, event) = self.first_step(receipt);
        clock.schedule_once(delay_ms, event);
    }

    /// Apply a fired event; returns the next timer to arm, if any.
    pub fn apply(
        &self,
        form: &mut ContactForm,
        event: SubmissionEvent,
    ) -> Result<Option<(u64, SubmissionEvent)>, FormError> {
        match event {
            SubmissionEvent::Delivered(receipt) => {
                form.complete_submission(receipt)?;
                Ok(Some((self.reset_delay_ms, SubmissionEvent::ResetDue(receipt))))
            }
            SubmissionEvent::ResetDue(receipt) => {
                form.reset(receipt);
                Ok(None)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Invalid,
    Subscribed,
}

/// The footer's email-only signup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    email: String,
    status: NewsletterStatus,
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> NewsletterStatus {
        self.status
    }

    /// Any edit clears the status: the address on screen is no longer the
    /// one that was checked.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.status = NewsletterStatus::Idle;
    }

    pub fn subscribe(&mut self) -> Result<(), FormError> {
        if !is_valid_email(&self.email) {
            self.status = NewsletterStatus::Invalid;
            return Err(FormError::InvalidEmail(self.email.trim().to_string()));
        }
        self.status = NewsletterStatus::Subscribed;
        log::info!("Newsletter signup for {}", self.email.trim());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "Ada Lovelace");
        form.set_field(FormField::Email, "ada@engines.io");
        form.set_field(FormField::Service, choice_value("Web Development"));
        form.set_field(FormField::Message, "A new storefront.");
        form
    }

    #[test]
    fn required_fields_are_name_email_service_message() {
        let required = FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .collect::<Vec<_>>();
        assert_eq!(
            required,
            vec![FormField::Name, FormField::Email, FormField::Service, FormField::Message]
        );
        assert_eq!(FormField::Message.caption(), "Project Details *");
        assert_eq!(FormField::Budget.caption(), "Budget Range");
    }

    #[test]
    fn validation_reports_every_missing_field_in_form_order() {
        let mut form = ContactForm::new();
        form.set_field(FormField::Email, "someone@example.com");
        form.set_field(FormField::Name, "   ");
        assert_eq!(
            form.validate(),
            Err(FormError::MissingRequired(vec![
                FormField::Name,
                FormField::Service,
                FormField::Message,
            ]))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["plain", "@example.com", "ada@", "a@b@c", "ada lovelace@x.io"] {
            assert!(!is_valid_email(email), "{email}");
        }
        assert!(is_valid_email(" ada@engines.io "));

        let mut form = filled_form();
        form.set_field(FormField::Email, "not-an-email");
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn submit_refuses_while_busy() {
        let mut form = filled_form();
        let receipt = form.submit().unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Submitting { receipt });
        assert_eq!(form.submit(), Err(FormError::AlreadySubmitting));
        form.complete_submission(receipt).unwrap();
        assert_eq!(form.submit(), Err(FormError::AlreadySubmitted));
    }

    #[test]
    fn edits_are_ignored_once_submitted() {
        let mut form = filled_form();
        let receipt = form.submit().unwrap();
        assert!(form.set_field(FormField::Company, "Engines Ltd"));
        form.complete_submission(receipt).unwrap();
        assert!(!form.set_field(FormField::Company, "Other"));
        assert_eq!(form.fields().company, "Engines Ltd");
    }

    #[test]
    fn stale_receipt_neither_completes_nor_resets() {
        let mut form = filled_form();
        let receipt = form.submit().unwrap();
        let stale = Ulid::new();
        assert_eq!(
            form.complete_submission(stale),
            Err(FormError::NoPendingSubmission(stale))
        );
        form.complete_submission(receipt).unwrap();
        assert!(!form.reset(stale));
        assert!(form.is_submitted());
        assert!(form.reset(receipt));
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn choice_values_are_lowercased_options() {
        assert_eq!(choice_value("UI/UX Design"), "ui/ux design");
        assert_eq!(
            choice_option(&BUDGET_RANGES, "$100,000+"),
            Some("$100,000+")
        );
        assert_eq!(
            choice_option(&SERVICE_OPTIONS, "seo & analytics"),
            Some("SEO & Analytics")
        );
        assert_eq!(choice_option(&SERVICE_OPTIONS, "plumbing"), None);
    }

    #[test]
    fn payload_uses_lowercase_field_names() {
        let payload = filled_form().payload_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["service"], "web development");
        assert_eq!(value["budget"], "");
    }

    #[test]
    fn timeline_steps_follow_config_delays() {
        let timeline = SubmissionTimeline::default();
        let mut form = filled_form();
        let receipt = form.submit().unwrap();
        assert_eq!(
            timeline.first_step(receipt),
            (2000, SubmissionEvent::Delivered(receipt))
        );
        let next = timeline
            .apply(&mut form, SubmissionEvent::Delivered(receipt))
            .unwrap();
        assert_eq!(next, Some((3000, SubmissionEvent::ResetDue(receipt))));
        assert_eq!(
            timeline.apply(&mut form, SubmissionEvent::ResetDue(receipt)),
            Ok(None)
        );
        assert!(!form.is_submitted());
    }

    #[test]
    fn newsletter_marks_invalid_until_edited() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("nope");
        assert!(signup.subscribe().is_err());
        assert_eq!(signup.status(), NewsletterStatus::Invalid);
        signup.set_email("reader@news.io");
        assert_eq!(signup.status(), NewsletterStatus::Idle);
        signup.subscribe().unwrap();
        assert_eq!(signup.status(), NewsletterStatus::Subscribed);
    }

    #[test]
    fn editing_after_subscribing_clears_the_confirmation() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("reader@news.io");
        signup.subscribe().unwrap();
        signup.set_email("other@news.io");
        assert_eq!(signup.status(), NewsletterStatus::Idle);
    }
}
