//! Wire shapes of the CMS REST API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{MessageAck, NavigationEntry, Profile};

/// Login request payload (`identifier` is a username or an email)
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Registration request payload
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login or registration response
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub jwt: Option<String>,
    pub user: Profile,
}

/// `{"data": null, "error": {...}}` returned on any non-2xx status
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    pub total: u64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CollectionEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

/// Core routes answer with the envelope, custom controllers with a bare
/// array.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Envelope(CollectionEnvelope<T>),
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Envelope(envelope) => envelope.data,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ImageRecord {
    pub url: String,
    #[serde(default, rename = "alternativeText")]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    One(ImageRecord),
    Many(Vec<ImageRecord>),
}

impl ImageField {
    pub fn first(self) -> Option<ImageRecord> {
        match self {
            Self::One(image) => Some(image),
            Self::Many(images) => images.into_iter().next(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ArticleRecord {
    pub id: u64,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, rename = "publishedAt", deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<ImageField>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PageRecord {
    pub id: u64,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<String>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "publishedAt", deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub img: Option<ImageField>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NavigationRecord {
    pub title: String,
    pub slug: String,
    #[serde(default, rename = "publishedAt", deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<NavigationRecord> for NavigationEntry {
    fn from(record: NavigationRecord) -> Self {
        Self {
            title: record.title,
            slug: record.slug,
            published_at: record.published_at,
        }
    }
}

/// Contact message payload, wrapped as `{"data": {...}}` on the wire
#[derive(Clone, Debug, Serialize)]
pub struct MessagePayload<'a> {
    #[serde(rename = "Message")]
    pub message: &'a str,
    pub email: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct DataWrapper<T> {
    pub data: T,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub data: Option<MessageRecord>,
}

impl From<MessageResponse> for MessageAck {
    fn from(response: MessageResponse) -> Self {
        let record = response.data.unwrap_or_default();
        Self {
            id: record.id,
            document_id: record.document_id,
        }
    }
}

/// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates (midnight UTC)
/// and `null`.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}
