use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, Responder};

use crate::common::ContentError;
use crate::models::{ContentKind, Navigation};
use crate::web::helpers::{current_profile, render, render_status};
use crate::web::state::AppState;
use crate::web::templates::{
    ContactState, ErrorTemplate, IndexTemplate, NotFoundTemplate, PageTemplate, PagesTemplate,
};

#[get("/")]
pub async fn public_index(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let posts = state.cms.list_content(ContentKind::Article).await;
    let profile = current_profile(&state, &req).await;

    render(IndexTemplate {
        profile,
        posts,
        contact: ContactState::default(),
    })
}

#[get("/page")]
pub async fn public_pages(state: web::Data<AppState>) -> impl Responder {
    let pages = state.cms.list_content(ContentKind::Page).await;

    render(PagesTemplate { pages })
}

#[get("/page/{slug}")]
pub async fn public_page(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    match state.cms.get_content_by_slug(&slug).await {
        Ok(page) => {
            let entries = state.cms.list_navigation().await;
            let current = page.slug.as_deref().unwrap_or(slug.trim());
            let navigation = Navigation::around(&entries, current);

            render(PageTemplate { page, navigation })
        }
        Err(ContentError::NotFound(_)) => render_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                path: format!("/page/{slug}"),
            },
        ),
        Err(ContentError::Unavailable(e)) => {
            log::error!("Failed to load page {:?}: {}", slug, e);
            render_status(
                StatusCode::BAD_GATEWAY,
                ErrorTemplate {
                    title: "Page unavailable".to_string(),
                    message: "This page could not be loaded right now. Please try again later."
                        .to_string(),
                },
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_index)
        .service(public_pages)
        .service(public_page);
}
