//! Service entry point: loads settings, initialises logging, and serves the
//! registration and lookup endpoints.

use std::env;
use std::io;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_registry::server::{ServerConfig, create_server};
use user_registry::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    create_server(ServerConfig::new(bind_addr))?.await
}
