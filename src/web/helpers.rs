use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::models::Profile;
use crate::web::state::AppState;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(StatusCode::OK, t)
}

pub fn render_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

/// Login URL that sends the user back to `return_to` afterwards.
pub fn login_location(return_to: &str) -> String {
    format!("/login?redirectTo={}", urlencoding::encode(return_to))
}

/// Best-effort lookup of the logged-in user. Every failure reads as
/// "not logged in".
pub async fn current_profile(state: &AppState, req: &HttpRequest) -> Option<Profile> {
    let token = state.sessions.token(req)?;

    match state.cms.get_profile(Some(&token)).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::debug!("Rendering logged-out view: {}", e);
            None
        }
    }
}
