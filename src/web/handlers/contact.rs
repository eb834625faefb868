use actix_web::http::StatusCode;
use actix_web::{get, post, web, Responder};

use crate::common::SubmissionError;
use crate::web::forms::ContactForm;
use crate::web::helpers::{render, render_status};
use crate::web::state::AppState;
use crate::web::templates::{ContactState, ContactTemplate};

fn user_message(err: &SubmissionError) -> String {
    match err {
        SubmissionError::Transport(_) => {
            "Your message could not be sent. Please try again.".to_string()
        }
        other => other.to_string(),
    }
}

#[get("/contact")]
pub async fn contact_form() -> impl Responder {
    render(ContactTemplate {
        contact: ContactState::default(),
    })
}

/// Each accepted submission is a separate CMS write; resubmitting the form
/// sends the message again.
#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let form = form.into_inner();

    match state.cms.post_message(&form.email, &form.message).await {
        Ok(ack) => {
            log::info!("Contact message stored (id {:?})", ack.id);
            render(ContactTemplate {
                contact: ContactState::sent(),
            })
        }
        Err(e) => {
            let status = match e {
                SubmissionError::MissingField(_) | SubmissionError::InvalidEmail => {
                    StatusCode::BAD_REQUEST
                }
                SubmissionError::Rejected { .. } | SubmissionError::Transport(_) => {
                    StatusCode::BAD_GATEWAY
                }
            };

            render_status(
                status,
                ContactTemplate {
                    contact: ContactState {
                        email: form.email,
                        message: form.message,
                        error: Some(user_message(&e)),
                        sent: false,
                    },
                },
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_form).service(contact_submit);
}
