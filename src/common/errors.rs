use serde::Serialize;
use thiserror::Error;

/// Fallback shown when the CMS rejects a request without explaining why.
pub const GENERIC_API_ERROR: &str = "Unknown API error";

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CMS responded with status {status}: {}", .message.as_deref().unwrap_or(GENERIC_API_ERROR))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed CMS payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CmsError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
    pub status: Option<u16>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

impl From<CmsError> for AuthError {
    fn from(err: CmsError) -> Self {
        match err {
            CmsError::Status { status, message } => Self {
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_API_ERROR.to_string()),
                status: Some(status),
            },
            other => Self {
                message: GENERIC_API_ERROR.to_string(),
                status: other.status(),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("No valid session")]
    Unauthenticated,

    #[error("Profile unavailable: {0}")]
    Unavailable(CmsError),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No content with slug {0:?}")]
    NotFound(String),

    #[error("Content unavailable: {0}")]
    Unavailable(#[from] CmsError),
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("The {0} field is required")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Message could not be sent: {0}")]
    Transport(CmsError),
}

impl From<CmsError> for SubmissionError {
    fn from(err: CmsError) -> Self {
        match err {
            CmsError::Status { status, message } => Self::Rejected {
                status,
                message: message.unwrap_or_else(|| GENERIC_API_ERROR.to_string()),
            },
            other => Self::Transport(other),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
