use crate::cms::CmsClient;
use crate::services::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub cms: CmsClient,
    pub sessions: SessionManager,
}
