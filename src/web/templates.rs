use askama::Template;

use crate::models::{ContentItem, Navigation, Profile};

/// Contact form values and outcome. Fields are cleared only after a
/// successful submission.
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub email: String,
    pub message: String,
    pub error: Option<String>,
    pub sent: bool,
}

impl ContactState {
    pub fn sent() -> Self {
        Self {
            sent: true,
            ..Self::default()
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub profile: Option<Profile>,
    pub posts: Vec<ContentItem>,
    pub contact: ContactState,
}

#[derive(Template)]
#[template(path = "pages.html")]
pub struct PagesTemplate {
    pub pages: Vec<ContentItem>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub page: ContentItem,
    pub navigation: Navigation,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub identifier: String,
    pub redirect_to: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub username: String,
    pub email: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub profile: Profile,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub contact: ContactState,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
