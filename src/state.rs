use std::sync::Arc;

use crate::application::services::{ClickService, LinkService};
use crate::auth::Authenticator;

/// Shared application state injected into every handler.
///
/// Built once at startup from an explicitly constructed storage handle; no
/// ambient globals, so tests assemble isolated instances freely.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_service: Arc<ClickService>,
    pub authenticator: Arc<Authenticator>,
}
