use serde_json::json;

use crate::common::SubmissionError;
use crate::log_err;
use crate::models::{ContactMessage, MessageAck};
use crate::types::{DataWrapper, MessagePayload, MessageResponse};

use super::CmsClient;

impl CmsClient {
    /// Validates required fields before any request is made. There is no
    /// idempotency key: every call that passes validation is a new write.
    pub async fn post_message(
        &self,
        email: &str,
        message: &str,
    ) -> Result<MessageAck, SubmissionError> {
        let contact = ContactMessage::new(email, message)?;
        self.submit_message(&contact).await
    }

    pub async fn submit_message(
        &self,
        contact: &ContactMessage,
    ) -> Result<MessageAck, SubmissionError> {
        let req = self.post("/messages").json(&DataWrapper {
            data: MessagePayload {
                message: contact.message(),
                email: contact.email(),
            },
        });

        let res: MessageResponse = self
            .send(self.with_service_token(req))
            .await
            .map_err(|e| {
                log_err!(e, &json!({ "op": "post_message", "email": contact.email() }));
                SubmissionError::from(e)
            })?;

        Ok(res.into())
    }
}
