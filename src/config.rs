use std::env;
use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    /// Origin of the CMS, without a trailing slash and without `/api`.
    pub base_url: String,
    pub service_token: Option<String>,
    pub timeout: Duration,
}

impl CmsConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            service_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub cms: CmsConfig,
    pub session_secret: Option<String>,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let base_url = var("STRAPI_URL").unwrap_or_else(|| {
            log::info!("STRAPI_URL not set, using default: {DEFAULT_CMS_URL}");
            DEFAULT_CMS_URL.to_string()
        });
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "STRAPI_URL",
                reason: format!("expected an http(s) URL, got {base_url:?}"),
            });
        }

        let timeout = match var("CMS_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "CMS_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got {raw:?}"),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let session_secret = var("SESSION_SECRET");
        if let Some(secret) = &session_secret {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::Invalid {
                    key: "SESSION_SECRET",
                    reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
                });
            }
        }

        let cookie_secure = match var("COOKIE_SECURE").map(|v| v.to_lowercase()).as_deref() {
            None => true,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "COOKIE_SECURE",
                    reason: format!("expected true or false, got {other:?}"),
                })
            }
        };

        Ok(Self {
            bind_addr,
            cms: CmsConfig {
                service_token: var("STRAPI_TOKEN"),
                timeout,
                ..CmsConfig::new(&base_url)
            },
            session_secret,
            cookie_secure,
        })
    }
}
