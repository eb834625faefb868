pub mod account;
pub mod auth;
pub mod contact;
pub mod public;

use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::web::helpers::render_status;
use crate::web::state::AppState;
use crate::web::templates::NotFoundTemplate;

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    if state.cms.health_check().await {
        HttpResponse::Ok().body("ok")
    } else {
        HttpResponse::ServiceUnavailable().body("cms unavailable")
    }
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    render_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: req.path().to_string(),
        },
    )
}

/// Configure all routes. The 404 fallback is registered separately with
/// `App::default_service`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    account::configure(cfg);
    contact::configure(cfg);
    cfg.service(health);
}
