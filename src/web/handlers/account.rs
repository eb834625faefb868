use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::common::ProfileError;
use crate::web::helpers::{login_location, render, render_status};
use crate::web::state::AppState;
use crate::web::templates::{ErrorTemplate, ProfileTemplate};

#[get("/profile")]
pub async fn profile(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let token = state.sessions.token(&req);

    match state.cms.get_profile(token.as_ref()).await {
        Ok(profile) => render(ProfileTemplate { profile }),
        Err(ProfileError::Unauthenticated) => {
            let mut res = HttpResponse::SeeOther();
            res.insert_header(("Location", login_location("/profile")));
            // Token rejected by the CMS
            if token.is_some() {
                res.cookie(state.sessions.revoke());
            }
            res.finish()
        }
        Err(ProfileError::Unavailable(e)) => {
            log::error!("Profile unavailable: {}", e);
            render_status(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorTemplate {
                    title: "Profile unavailable".to_string(),
                    message: "Your profile cannot be loaded right now. Please try again later."
                        .to_string(),
                },
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(profile);
}
