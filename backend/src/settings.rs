//! Runtime settings loaded via OrthoConfig.
//!
//! Values are layered from command-line flags, `USER_REGISTRY_*` environment
//! variables, and an optional configuration file.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid listen host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

/// Settings controlling where the HTTP server listens.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
