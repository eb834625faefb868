use actix_web::cookie::{time::Duration, Cookie, CookieJar, Key, SameSite};
use actix_web::HttpRequest;

use crate::common::ConfigError;
use crate::config::MIN_SECRET_LEN;
use crate::models::SessionToken;

pub const SESSION_COOKIE: &str = "kachow_session";

const SESSION_DAYS: i64 = 30;

/// Keeps the CMS bearer token in a private (signed and encrypted) cookie.
/// The cookie carries nothing but the token.
#[derive(Clone)]
pub struct SessionManager {
    key: Key,
    secure: bool,
}

impl SessionManager {
    pub fn new(key: Key, secure: bool) -> Self {
        Self { key, secure }
    }

    /// Without a secret, a random key is generated and sessions do not
    /// survive a restart.
    pub fn from_secret(secret: Option<&str>, secure: bool) -> Result<Self, ConfigError> {
        let key = match secret {
            Some(secret) if secret.len() < MIN_SECRET_LEN => {
                return Err(ConfigError::Invalid {
                    key: "SESSION_SECRET",
                    reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
                });
            }
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => {
                log::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                Key::generate()
            }
        };
        Ok(Self::new(key, secure))
    }

    pub fn token(&self, req: &HttpRequest) -> Option<SessionToken> {
        let cookie = req.cookie(SESSION_COOKIE)?;

        let mut jar = CookieJar::new();
        jar.add_original(cookie);

        jar.private(&self.key)
            .get(SESSION_COOKIE)
            .and_then(|c| SessionToken::new(c.value()))
    }

    pub fn issue(&self, token: &SessionToken) -> Cookie<'static> {
        let cookie = Cookie::build(SESSION_COOKIE, token.as_str().to_string())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(SESSION_DAYS))
            .finish();

        let mut jar = CookieJar::new();
        jar.private_mut(&self.key).add(cookie);

        jar.get(SESSION_COOKIE)
            .cloned()
            .unwrap_or_else(|| self.revoke())
    }

    pub fn revoke(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .finish();
        cookie.make_removal();
        cookie
    }
}
