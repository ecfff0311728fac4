use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The form control's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a message is already being sent")]
    AlreadySubmitting,
    #[error("failed to send message: {0}")]
    SendFailed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Delivers a submitted message.
pub trait MessageSender {
    fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Logs the message instead of delivering it. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSender;

impl MessageSender for SimulatedSender {
    fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        log::info!(
            "contact form submitted: {}",
            serde_json::to_string(message).unwrap_or_default()
        );
        Ok(())
    }
}

/// Identifies one submission so late timer callbacks from an older one are ignored.
pub type Ticket = u64;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    message: ContactMessage,
    status: SubmissionStatus,
    ticket: Ticket,
}

impl ContactForm {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.message.name,
            Field::Email => &self.message.email,
            Field::Message => &self.message.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.message.name = value,
            Field::Email => self.message.email = value,
            Field::Message => self.message.message = value,
        }
    }

    /// Checks every field is filled in and, if so, enters `Submitting`.
    /// Returns the ticket for this submission and a snapshot of the message.
    pub fn begin_submit(&mut self) -> Result<(Ticket, ContactMessage), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        self.ticket += 1;
        self.status = SubmissionStatus::Submitting;
        Ok((self.ticket, self.message.clone()))
    }

    /// Records the send outcome. Success clears the fields, failure keeps them.
    /// Returns false if the ticket is stale or nothing is in flight.
    pub fn complete(&mut self, ticket: Ticket, result: Result<(), ContactError>) -> bool {
        if ticket != self.ticket || !self.is_submitting() {
            return false;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.message = ContactMessage::default();
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = SubmissionStatus::Error;
            }
        }
        true
    }

    /// Hides the status banner once its display timeout fires.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if ticket != self.ticket
            || !matches!(
                self.status,
                SubmissionStatus::Success | SubmissionStatus::Error
            )
        {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSender;

    impl MessageSender for FailingSender {
        fn send(&self, _: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::SendFailed("offline".to_string()))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_successful_lifecycle() {
        let mut form = filled();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let (ticket, msg) = form.begin_submit().expect("form is complete");
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(msg.name, "Ada");

        assert!(form.complete(ticket, SimulatedSender.send(&msg)));
        assert_eq!(form.status(), SubmissionStatus::Success);
        for f in Field::ALL {
            assert_eq!(form.value(f), "");
        }

        assert!(form.dismiss(ticket));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_empty_field_blocks_submission() {
        for missing in Field::ALL {
            let mut form = filled();
            form.set(missing, "   ");
            assert_eq!(
                form.begin_submit(),
                Err(ContactError::MissingField(missing))
            );
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }
        let mut form = ContactForm::default();
        assert_eq!(
            form.begin_submit().unwrap_err().to_string(),
            "name is required"
        );
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let (ticket, msg) = form.begin_submit().unwrap();
        assert!(form.complete(ticket, FailingSender.send(&msg)));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.value(Field::Email), "ada@example.com");

        // retrying from the error banner is allowed
        let (retry, _) = form.begin_submit().unwrap();
        assert_ne!(retry, ticket);
    }

    #[test]
    fn test_stale_dismissal_ignored() {
        let mut form = filled();
        let (first, msg) = form.begin_submit().unwrap();
        form.complete(first, Ok(()));

        // user sends a second message while the first banner is showing
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "again");
        let (second, _) = form.begin_submit().unwrap();
        assert!(!form.dismiss(first));
        assert!(!form.complete(first, Ok(())));
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        assert!(form.complete(second, SimulatedSender.send(&msg)));
        assert!(form.dismiss(second));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_dismiss_while_idle_is_noop() {
        let mut form = ContactForm::default();
        assert!(!form.dismiss(0));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}
