use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one live résumé session. Mutations take the write lock for the
    /// whole mutate → rescore step, so edits settle one at a time.
    pub session: Arc<RwLock<Session>>,
    pub config: Config,
}

impl AppState {
    pub fn new(session: Session, config: Config) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            config,
        }
    }
}
