use serde_json::json;

use crate::common::{AuthError, ProfileError};
use crate::log_err;
use crate::models::{AuthSession, Profile, Registration, SessionToken};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

use super::CmsClient;

impl CmsClient {
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthSession, AuthError> {
        let req = self
            .post("/auth/local")
            .json(&LoginRequest { identifier, password });

        let res: AuthResponse = self.send(req).await.map_err(|e| {
            log_err!(e, &json!({ "op": "login", "identifier": identifier }));
            AuthError::from(e)
        })?;

        let token = res
            .jwt
            .and_then(SessionToken::new)
            .ok_or_else(|| AuthError::new("Token missing from the CMS response"))?;

        Ok(AuthSession {
            token,
            user: res.user,
        })
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Registration, AuthError> {
        let req = self.post("/auth/local/register").json(&RegisterRequest {
            username,
            email,
            password,
        });

        let res: AuthResponse = self.send(req).await.map_err(|e| {
            log_err!(e, &json!({ "op": "register", "username": username, "email": email }));
            AuthError::from(e)
        })?;

        Ok(Registration {
            user: res.user,
            token: res.jwt.and_then(SessionToken::new),
        })
    }

    /// A missing token short-circuits to `Unauthenticated` without touching
    /// the network. A token the CMS refuses gives the same result.
    pub async fn get_profile(&self, token: Option<&SessionToken>) -> Result<Profile, ProfileError> {
        let token = token.ok_or(ProfileError::Unauthenticated)?;

        let req = self.get("/users/me").bearer_auth(token.as_str());

        self.send(req).await.map_err(|e| {
            if e.is_unauthorized() {
                log::debug!("CMS rejected session token: {}", e);
                ProfileError::Unauthenticated
            } else {
                log_err!(e, &json!({ "op": "get_profile" }));
                ProfileError::Unavailable(e)
            }
        })
    }
}
