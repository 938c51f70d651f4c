//! Server configuration.

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Host advertised in `/swagger.json`. Falls back to `bind_addr`.
    pub public_host: Option<String>,
    /// Whether the store starts with the three startup animals.
    pub seed: bool,
}

impl ServerConfig {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            public_host: None,
            seed: true,
        }
    }

    pub fn with_public_host(mut self, host: impl Into<String>) -> Self {
        self.public_host = Some(host.into());
        self
    }

    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn docs_host(&self) -> String {
        self.public_host
            .clone()
            .unwrap_or_else(|| self.bind_addr.to_string())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 3000)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.seed);
        assert_eq!(config.docs_host(), "127.0.0.1:3000");
    }

    #[test]
    fn config_builder() {
        let config = ServerConfig::new("0.0.0.0:8080".parse().unwrap())
            .with_public_host("animals.local")
            .with_seed(false);

        assert!(!config.seed);
        assert_eq!(config.docs_host(), "animals.local");
    }
}
