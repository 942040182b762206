use crate::config::AppConfig;
use crate::gemini::TextGenerator;
use crate::session::SessionStore;

/// Everything a request handler needs, shared by all astra workers.
pub struct AppState {
    pub config: AppConfig,
    pub generator: Box<dyn TextGenerator>,
    pub sessions: SessionStore,
}
