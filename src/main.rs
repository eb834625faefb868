use std::io;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use tracing_subscriber::{fmt, EnvFilter};

use kachow::cms::CmsClient;
use kachow::config::Config;
use kachow::services::SessionManager;
use kachow::web::{handlers, middleware::SecurityHeaders, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let cms = CmsClient::new(&config.cms).map_err(io::Error::other)?;
    if !cms.health_check().await {
        log::warn!("CMS at {} is not answering yet", cms.base_url());
    }

    let sessions =
        SessionManager::from_secret(config.session_secret.as_deref(), config.cookie_secure)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let security = SecurityHeaders::new(cms.base_url());
    let state = Data::new(AppState { cms, sessions });

    log::info!("Listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(security.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
