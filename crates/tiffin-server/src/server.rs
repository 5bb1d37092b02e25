use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

/// The Tiffin portal HTTP server.
pub struct PortalServer {
    state: AppState,
}

impl PortalServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> std::io::Result<()> {
        let bind_addr = self.state.config.bind_addr;
        let app = build_router(self.state);
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("tiffin server listening on {bind_addr}");
        axum::serve(listener, app).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = PortalServer::new(AppState::in_memory(ServerConfig::default()));
        assert_eq!(
            server.config().bind_addr,
            "127.0.0.1:8470".parse().unwrap()
        );
    }

    #[test]
    fn router_builds() {
        let server = PortalServer::new(AppState::in_memory(ServerConfig::default()));
        let _router = server.router();
    }
}
