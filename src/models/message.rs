use serde::Serialize;

use crate::common::SubmissionError;
use crate::services::validate_email;

/// A contact-form submission that passed required-field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(email: &str, message: &str) -> Result<Self, SubmissionError> {
        let email = email.trim();
        let message = message.trim();

        if email.is_empty() {
            return Err(SubmissionError::MissingField("email"));
        }
        if message.is_empty() {
            return Err(SubmissionError::MissingField("message"));
        }
        if !validate_email(email) {
            return Err(SubmissionError::InvalidEmail);
        }

        Ok(Self {
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageAck {
    pub id: Option<u64>,
    pub document_id: Option<String>,
}
