use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentImage {
    pub url: String,
    pub alt: Option<String>,
}

/// An article or a page as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub document_id: Option<String>,
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
    pub body: Option<String>,
    pub image: Option<ContentImage>,
    pub published_at: Option<DateTime<Utc>>,
    pub slug: Option<String>,
}

impl ContentItem {
    pub fn published_label(&self) -> String {
        self.published_at
            .map(|at| at.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|i| i.url.as_str())
    }

    pub fn image_alt(&self) -> &str {
        self.image
            .as_ref()
            .and_then(|i| i.alt.as_deref())
            .unwrap_or(&self.title)
    }

    pub fn href(&self) -> Option<String> {
        match (self.kind, self.slug.as_deref()) {
            (ContentKind::Page, Some(slug)) => {
                Some(format!("/page/{}", urlencoding::encode(slug)))
            }
            _ => None,
        }
    }
}

/// Newest first; items without a publish date sink to the end.
pub fn sort_newest_first(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
