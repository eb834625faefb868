use serde::{Deserialize, Serialize};

use super::SessionToken;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub provider: Option<String>,
}

impl Profile {
    pub fn confirmed_label(&self) -> &'static str {
        if self.confirmed { "Yes" } else { "No" }
    }

    pub fn blocked_label(&self) -> &'static str {
        if self.blocked { "Yes" } else { "No" }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: SessionToken,
    pub user: Profile,
}

/// Result of a successful registration. The CMS withholds the token while
/// the account still awaits email confirmation.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: Profile,
    pub token: Option<SessionToken>,
}
