//! Application state shared across handlers.

use std::sync::Arc;

use qrforge_render::Renderer;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the session store and the render adapter.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    sessions: SessionStore,
    renderer: Renderer,
}

impl AppState {
    /// Create application state over the given render adapter.
    #[must_use]
    pub fn new(config: ServerConfig, renderer: Renderer) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions,
                renderer,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get a reference to the render adapter.
    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.inner.renderer
    }
}
