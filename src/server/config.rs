/**
 * Server Configuration
 *
 * Configuration is read from environment variables with defaults suited
 * to local development. Invalid values fall back to the default rather
 * than aborting startup.
 */

use std::net::SocketAddr;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (`SERVER_PORT`, default 3000)
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);

        Self { port }
    }

    /// Address the server binds to (all interfaces)
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
