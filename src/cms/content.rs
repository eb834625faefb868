use serde_json::json;

use crate::common::{CmsError, ContentError};
use crate::log_err;
use crate::models::{sort_newest_first, ContentImage, ContentItem, ContentKind, NavigationEntry};
use crate::types::{ArticleRecord, ImageField, ListPayload, NavigationRecord, PageRecord};

use super::CmsClient;

const PAGE_IMAGE_FIELDS: [(&str, &str); 3] = [
    ("populate[img][fields][0]", "url"),
    ("populate[img][fields][1]", "alternativeText"),
    ("populate[img][fields][2]", "name"),
];

const NAVIGATION_QUERY: [(&str, &str); 5] = [
    ("sort[0]", "publishedAt:desc"),
    ("fields[0]", "title"),
    ("fields[1]", "slug"),
    ("fields[2]", "publishedAt"),
    ("fields[3]", "documentId"),
];

impl CmsClient {
    /// Newest first. Failures are logged and yield an empty list.
    pub async fn list_content(&self, kind: ContentKind) -> Vec<ContentItem> {
        let result = match kind {
            ContentKind::Article => self.fetch_articles().await,
            ContentKind::Page => self.fetch_pages().await,
        };

        match result {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                log::debug!("Fetched {} {}", items.len(), kind.plural());
                items
            }
            Err(e) => {
                log_err!(e, &json!({ "op": "list_content", "kind": kind }));
                Vec::new()
            }
        }
    }

    pub async fn get_content_by_slug(&self, slug: &str) -> Result<ContentItem, ContentError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ContentError::NotFound(String::new()));
        }

        let req = self
            .get("/pages")
            .query(&[("filters[slug][$eq]", slug)])
            .query(&PAGE_IMAGE_FIELDS);

        let payload: ListPayload<PageRecord> =
            self.send(self.with_service_token(req)).await.map_err(|e| {
                log_err!(e, &json!({ "op": "get_content_by_slug", "slug": slug }));
                e
            })?;

        match payload.into_items().into_iter().next() {
            Some(record) => Ok(self.page_item(record)),
            None => {
                log::info!("No page found for slug {:?}", slug);
                Err(ContentError::NotFound(slug.to_string()))
            }
        }
    }

    /// Title/slug listing of every page, newest first, for previous/next
    /// links. Failures are logged and yield an empty list.
    pub async fn list_navigation(&self) -> Vec<NavigationEntry> {
        let req = self.get("/pages").query(&NAVIGATION_QUERY);

        match self
            .send::<ListPayload<NavigationRecord>>(self.with_service_token(req))
            .await
        {
            Ok(payload) => {
                let mut entries: Vec<NavigationEntry> =
                    payload.into_items().into_iter().map(Into::into).collect();
                entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
                entries
            }
            Err(e) => {
                log_err!(e, &json!({ "op": "list_navigation" }));
                Vec::new()
            }
        }
    }

    async fn fetch_articles(&self) -> Result<Vec<ContentItem>, CmsError> {
        let req = self.with_service_token(self.get("/articles/all"));
        let payload: ListPayload<ArticleRecord> = self.send(req).await?;

        Ok(payload
            .into_items()
            .into_iter()
            .map(|record| self.article_item(record))
            .collect())
    }

    async fn fetch_pages(&self) -> Result<Vec<ContentItem>, CmsError> {
        let req = self
            .get("/pages")
            .query(&[("sort[0]", "publishedAt:desc")])
            .query(&PAGE_IMAGE_FIELDS);
        let payload: ListPayload<PageRecord> = self.send(self.with_service_token(req)).await?;

        Ok(payload
            .into_items()
            .into_iter()
            .map(|record| self.page_item(record))
            .collect())
    }

    fn image(&self, field: Option<ImageField>) -> Option<ContentImage> {
        let record = field?.first()?;
        Some(ContentImage {
            url: self.media_url(&record.url)?,
            alt: record.alternative_text.or(record.name),
        })
    }

    fn article_item(&self, record: ArticleRecord) -> ContentItem {
        ContentItem {
            id: record.id,
            document_id: record.document_id,
            kind: ContentKind::Article,
            title: record.title,
            description: record.description.unwrap_or_default(),
            body: None,
            image: self.image(record.image),
            published_at: record.date.or(record.published_at),
            slug: None,
        }
    }

    fn page_item(&self, record: PageRecord) -> ContentItem {
        ContentItem {
            id: record.id,
            document_id: record.document_id,
            kind: ContentKind::Page,
            title: record.title,
            description: record.description.unwrap_or_default(),
            body: record.content.filter(|c| !c.trim().is_empty()),
            image: self.image(record.img),
            published_at: record.published_at,
            slug: Some(record.slug),
        }
    }
}
