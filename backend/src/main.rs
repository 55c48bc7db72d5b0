//! Backend entry-point: loads configuration, seeds storage and serves HTTP.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use community_backend::example_data::seed_on_startup;
use community_backend::inbound::http::health::HealthState;
use community_backend::inbound::http::state::HttpState;
use community_backend::outbound::memory::{InMemoryCommunityRepository, InMemoryUserRepository};
use community_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Load layered configuration from CLI arguments, environment and files.
fn load_settings<I>(args: I) -> std::io::Result<AppSettings>
where
    I: IntoIterator<Item = OsString>,
{
    AppSettings::load_from_iter(args).map_err(|e| {
        error!(error = %e, "failed to load configuration");
        std::io::Error::other(format!("failed to load configuration: {e}"))
    })
}

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

    let settings = load_settings(std::env::args_os())?;

    let seed = seed_on_startup(&settings).map_err(|e| {
        error!(error = %e, "example data seeding failed");
        std::io::Error::other(e)
    })?;
    info!(
        communities = seed.communities.len(),
        users = seed.users.len(),
        "repositories initialised"
    );

    let http_state = HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new(seed.users)),
        Arc::new(InMemoryCommunityRepository::new(seed.communities)),
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), http_state);
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

#[cfg(test)]
mod tests {
    //! Regression coverage for binary bootstrap.
    use super::*;
    use env_lock::lock_env;

    #[test]
    fn settings_load_from_arguments() {
        let _guard = lock_env([
            ("COMMUNITIES_BIND_ADDR", None::<String>),
            ("COMMUNITIES_SEED_ENABLED", None::<String>),
        ]);

        let settings = load_settings([OsString::from("backend")]).expect("config should load");

        assert_eq!(settings.bind_addr().port(), 8080);
        assert!(settings.seed_enabled());
    }
}
