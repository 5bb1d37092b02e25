use tiffin_portal::Portal;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub portal: Portal,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(portal: Portal, config: ServerConfig) -> Self {
        Self { portal, config }
    }

    /// State over fresh in-memory backends, minting media URLs from the
    /// configured base URL.
    pub fn in_memory(config: ServerConfig) -> Self {
        let portal = Portal::in_memory(&config.media_base_url);
        Self { portal, config }
    }
}
