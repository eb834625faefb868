use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::common::CmsError;
use crate::config::CmsConfig;
use crate::types::ErrorEnvelope;

#[derive(Clone)]
pub struct CmsClient {
    http: Client,
    base_url: String,
    service_token: Option<String>,
}

impl CmsClient {
    pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self::from_client(http, config))
    }

    pub fn from_client(http: Client, config: &CmsConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_token: config.service_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.endpoint(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.endpoint(path))
    }

    /// Attaches the service token, when one is configured.
    pub(crate) fn with_service_token(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.service_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Sends the request and decodes a 2xx body as `T`. Any other status
    /// becomes `CmsError::Status`, carrying the CMS error message when the
    /// body has one.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, CmsError> {
        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|e| e.error)
                .and_then(|e| e.message);

            return Err(CmsError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Whether the CMS answers on its API root.
    pub async fn health_check(&self) -> bool {
        match self.http.get(self.endpoint("")).send().await {
            Ok(res) => res.status().is_success(),
            Err(e) => {
                log::warn!("CMS health check failed: {}", e);
                false
            }
        }
    }

    /// Resolves a media path from the CMS into an absolute URL.
    pub fn media_url(&self, url: &str) -> Option<String> {
        let url = url.trim();
        if url.is_empty() {
            log::warn!("Empty media URL in CMS payload");
            return None;
        }

        if url.starts_with("http://") || url.starts_with("https://") {
            return Some(url.to_string());
        }

        if url.starts_with('/') {
            Some(format!("{}{}", self.base_url, url))
        } else {
            Some(format!("{}/{}", self.base_url, url))
        }
    }
}
