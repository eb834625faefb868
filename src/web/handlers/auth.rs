use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};

use crate::services::{safe_redirect, validate_email};
use crate::web::forms::{LoginForm, LoginQuery, RegisterForm};
use crate::web::helpers::{render, render_status};
use crate::web::state::AppState;
use crate::web::templates::{LoginTemplate, RegisterTemplate};

const CONFIRM_EMAIL_NOTICE: &str =
    "Your account has been created. Confirm your email address, then log in.";

fn login_page(identifier: String, redirect_to: Option<&str>, error: Option<String>) -> HttpResponse {
    let status = if error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    render_status(
        status,
        LoginTemplate {
            identifier,
            redirect_to: safe_redirect(redirect_to).unwrap_or_default().to_string(),
            error,
        },
    )
}

#[get("/login")]
pub async fn login_form(query: web::Query<LoginQuery>) -> impl Responder {
    login_page(String::new(), query.redirect_to.as_deref(), None)
}

#[post("/login")]
pub async fn login_submit(state: web::Data<AppState>, form: web::Form<LoginForm>) -> impl Responder {
    let form = form.into_inner();
    let identifier = form.identifier.trim().to_string();
    let redirect_to = form.redirect_to.as_deref();

    if identifier.is_empty() || form.password.is_empty() {
        return login_page(
            identifier,
            redirect_to,
            Some("Identifier and password are required".to_string()),
        );
    }

    match state.cms.login(&identifier, &form.password).await {
        Ok(session) => {
            log::info!("User {} logged in", session.user.username);
            let target = safe_redirect(redirect_to).unwrap_or("/");

            HttpResponse::SeeOther()
                .cookie(state.sessions.issue(&session.token))
                .insert_header(("Location", target))
                .finish()
        }
        Err(e) => login_page(identifier, redirect_to, Some(e.message)),
    }
}

#[get("/register")]
pub async fn register_form() -> impl Responder {
    render(RegisterTemplate {
        username: String::new(),
        email: String::new(),
        error: None,
        notice: None,
    })
}

#[post("/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    let form = form.into_inner();
    let username = form.username.trim().to_string();
    let email = form.email.trim().to_string();

    let invalid = if username.is_empty() || email.is_empty() || form.password.is_empty() {
        Some("Username, email and password are required")
    } else if !validate_email(&email) {
        Some("Invalid email address")
    } else {
        None
    };

    if let Some(error) = invalid {
        return render_status(
            StatusCode::BAD_REQUEST,
            RegisterTemplate {
                username,
                email,
                error: Some(error.to_string()),
                notice: None,
            },
        );
    }

    match state.cms.register(&username, &email, &form.password).await {
        Ok(registration) => match registration.token {
            Some(token) => {
                log::info!("User {} registered", registration.user.username);
                HttpResponse::SeeOther()
                    .cookie(state.sessions.issue(&token))
                    .insert_header(("Location", "/"))
                    .finish()
            }
            None => render(RegisterTemplate {
                username: String::new(),
                email: String::new(),
                error: None,
                notice: Some(CONFIRM_EMAIL_NOTICE.to_string()),
            }),
        },
        Err(e) => render_status(
            StatusCode::BAD_REQUEST,
            RegisterTemplate {
                username,
                email,
                error: Some(e.message),
                notice: None,
            },
        ),
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::SeeOther()
        .cookie(state.sessions.revoke())
        .insert_header(("Location", "/"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_form)
        .service(register_submit)
        .service(logout);
}
