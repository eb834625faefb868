#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use kachow::cms::CmsClient;
use kachow::config::CmsConfig;
use kachow::services::SessionManager;
use kachow::web::AppState;

pub const RIDER_USERNAME: &str = "mcqueen";
pub const RIDER_EMAIL: &str = "mcqueen@kachow.test";
pub const RIDER_PASSWORD: &str = "ka-chow-95";
pub const RIDER_JWT: &str = "jwt-lightning-95";
pub const CRASHING_JWT: &str = "jwt-crash";
pub const BLOCKED_EMAIL: &str = "blocked@kachow.test";
pub const SESSION_SECRET: &str = "radiator-springs-route-66-session-secret";

#[derive(Default)]
pub struct FakeCmsState {
    pub message_posts: AtomicUsize,
    pub messages: Mutex<Vec<Value>>,
    pub content_auth: Mutex<Vec<Option<String>>>,
}

pub struct FakeCms {
    pub base_url: String,
    pub state: web::Data<FakeCmsState>,
}

impl FakeCms {
    pub fn config(&self) -> CmsConfig {
        CmsConfig::new(&self.base_url)
    }

    pub fn client(&self) -> CmsClient {
        CmsClient::new(&self.config()).unwrap()
    }

    pub fn client_with_service_token(&self, token: &str) -> CmsClient {
        let config = CmsConfig {
            service_token: Some(token.to_string()),
            ..self.config()
        };
        CmsClient::new(&config).unwrap()
    }

    pub fn messages_posted(&self) -> usize {
        self.state.message_posts.load(Ordering::SeqCst)
    }

    pub fn stored_messages(&self) -> Vec<Value> {
        self.state.messages.lock().unwrap().clone()
    }

    pub fn content_auth_headers(&self) -> Vec<Option<String>> {
        self.state.content_auth.lock().unwrap().clone()
    }
}

/// Must be called from inside an actix runtime (`#[actix_web::test]`).
pub async fn spawn_fake_cms() -> FakeCms {
    let state = web::Data::new(FakeCmsState::default());
    let data = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/api", web::get().to(api_root))
            .route("/api/auth/local", web::post().to(auth_local))
            .route("/api/auth/local/register", web::post().to(auth_register))
            .route("/api/users/me", web::get().to(users_me))
            .route("/api/articles/all", web::get().to(articles_all))
            .route("/api/pages", web::get().to(pages))
            .route("/api/messages", web::post().to(messages))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    FakeCms {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_client() -> CmsClient {
    CmsClient::new(&CmsConfig::new("http://127.0.0.1:1")).unwrap()
}

pub fn session_manager() -> SessionManager {
    SessionManager::from_secret(Some(SESSION_SECRET), false).unwrap()
}

pub fn app_state(cms: CmsClient) -> AppState {
    AppState {
        cms,
        sessions: session_manager(),
    }
}

fn cms_error(status: u16, name: &str, message: &str) -> Value {
    json!({
        "data": null,
        "error": { "status": status, "name": name, "message": message, "details": {} }
    })
}

fn rider() -> Value {
    json!({
        "id": 1,
        "documentId": "u1",
        "username": RIDER_USERNAME,
        "email": RIDER_EMAIL,
        "provider": "local",
        "confirmed": true,
        "blocked": false,
        "createdAt": "2025-01-10T08:00:00.000Z",
        "updatedAt": "2025-01-10T08:00:00.000Z"
    })
}

fn page_records() -> Vec<Value> {
    vec![
        json!({
            "id": 11, "documentId": "pa", "title": "Alpha", "slug": "alpha",
            "description": "First stop", "content": "<p>Alpha <strong>body</strong></p>",
            "publishedAt": "2025-06-03T10:00:00.000Z",
            "img": [{ "url": "https://cdn.kachow.test/alpha.png", "alternativeText": "Alpha hero" }]
        }),
        json!({
            "id": 12, "documentId": "pb", "title": "Beta", "slug": "beta",
            "description": "Second stop", "content": "Beta body",
            "publishedAt": "2025-06-02T10:00:00.000Z",
            "img": null
        }),
        json!({
            "id": 13, "documentId": "pc", "title": "Gamma", "slug": "gamma",
            "description": "Third stop", "content": "",
            "publishedAt": "2025-06-01T10:00:00.000Z",
            "img": [{ "url": "/uploads/gamma.png", "name": "gamma.png" }]
        }),
    ]
}

fn envelope(data: Vec<Value>) -> Value {
    let total = data.len();
    json!({
        "data": data,
        "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": total } }
    })
}

fn record_content_auth(state: &FakeCmsState, req: &HttpRequest) {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.content_auth.lock().unwrap().push(header);
}

async fn api_root() -> HttpResponse {
    HttpResponse::Ok().json(json!({}))
}

async fn auth_local(body: web::Json<Value>) -> HttpResponse {
    let identifier = body["identifier"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match identifier {
        "no-token" => HttpResponse::Ok().json(json!({ "user": rider() })),
        "crash" => HttpResponse::InternalServerError().body("boom"),
        RIDER_USERNAME | RIDER_EMAIL if password == RIDER_PASSWORD => {
            HttpResponse::Ok().json(json!({ "jwt": RIDER_JWT, "user": rider() }))
        }
        _ => HttpResponse::BadRequest().json(cms_error(
            400,
            "ValidationError",
            "Invalid identifier or password",
        )),
    }
}

async fn auth_register(body: web::Json<Value>) -> HttpResponse {
    let username = body["username"].as_str().unwrap_or_default();
    let email = body["email"].as_str().unwrap_or_default();

    let user = json!({
        "id": 2, "username": username, "email": email,
        "provider": "local", "confirmed": false, "blocked": false
    });

    if username == "taken" {
        HttpResponse::BadRequest().json(cms_error(
            400,
            "ApplicationError",
            "Email or Username are already taken",
        ))
    } else if email.ends_with("@confirm.test") {
        HttpResponse::Ok().json(json!({ "user": user }))
    } else {
        HttpResponse::Ok().json(json!({ "jwt": format!("jwt-new-{username}"), "user": user }))
    }
}

async fn users_me(req: HttpRequest) -> HttpResponse {
    let auth = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if auth == format!("Bearer {RIDER_JWT}") {
        HttpResponse::Ok().json(rider())
    } else if auth == format!("Bearer {CRASHING_JWT}") {
        HttpResponse::InternalServerError().json(cms_error(500, "InternalServerError", "Internal Server Error"))
    } else {
        HttpResponse::Unauthorized().json(cms_error(
            401,
            "UnauthorizedError",
            "Missing or invalid credentials",
        ))
    }
}

/// Custom controller: answers with a bare array, oldest first.
async fn articles_all(state: web::Data<FakeCmsState>, req: HttpRequest) -> HttpResponse {
    record_content_auth(&state, &req);

    HttpResponse::Ok().json(json!([
        {
            "id": 1, "documentId": "a1", "Title": "Radiator Springs reopens",
            "Description": "Route 66 is back on the map.", "date": "2025-03-01",
            "image": { "id": 7, "url": "/uploads/springs.jpg" }
        },
        {
            "id": 2, "documentId": "a2", "Title": "Piston Cup recap",
            "Description": "Another win for number 95.", "date": "2025-05-20",
            "image": null
        }
    ]))
}

async fn pages(
    state: web::Data<FakeCmsState>,
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    record_content_auth(&state, &req);

    let records = page_records();

    if let Some(slug) = query.get("filters[slug][$eq]") {
        let matching = records
            .into_iter()
            .filter(|p| p["slug"].as_str() == Some(slug.as_str()))
            .collect();
        return HttpResponse::Ok().json(envelope(matching));
    }

    if query.contains_key("fields[0]") {
        let listing = records
            .into_iter()
            .map(|p| {
                json!({
                    "id": p["id"], "documentId": p["documentId"], "title": p["title"],
                    "slug": p["slug"], "publishedAt": p["publishedAt"]
                })
            })
            .collect();
        return HttpResponse::Ok().json(envelope(listing));
    }

    HttpResponse::Ok().json(envelope(records))
}

async fn messages(state: web::Data<FakeCmsState>, body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();

    if body["data"]["email"].as_str() == Some(BLOCKED_EMAIL) {
        return HttpResponse::Forbidden().json(cms_error(403, "ForbiddenError", "Forbidden"));
    }

    let id = state.message_posts.fetch_add(1, Ordering::SeqCst) + 1;
    let data = body["data"].clone();
    state.messages.lock().unwrap().push(body);

    HttpResponse::Ok().json(json!({
        "data": {
            "id": id,
            "documentId": format!("msg-{id}"),
            "Message": data["Message"],
            "email": data["email"]
        },
        "meta": {}
    }))
}
