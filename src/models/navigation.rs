use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub title: String,
    pub slug: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl NavigationEntry {
    pub fn href(&self) -> String {
        format!("/page/{}", urlencoding::encode(&self.slug))
    }
}

/// Neighbours of a page in the newest-first listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    pub previous: Option<NavigationEntry>,
    pub next: Option<NavigationEntry>,
}

impl Navigation {
    /// `entries` must be ordered newest first. `previous` is the newer
    /// neighbour, `next` the older one. Both are absent when `slug` is not
    /// listed.
    pub fn around(entries: &[NavigationEntry], slug: &str) -> Self {
        let Some(index) = entries.iter().position(|e| e.slug == slug) else {
            return Self::default();
        };

        Self {
            previous: index
                .checked_sub(1)
                .and_then(|i| entries.get(i))
                .cloned(),
            next: entries.get(index + 1).cloned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}
