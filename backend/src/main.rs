//! Secure Nest entry-point: loads settings, wires REST endpoints and serves
//! until shutdown.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use secure_nest::inbound::http::health::HealthState;
use secure_nest::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_seed_residents(settings.seed_residents());
    let server = create_server(health_state.clone(), config)?;

    let result = server.await;
    health_state.mark_draining();
    info!("server stopped");
    result
}
