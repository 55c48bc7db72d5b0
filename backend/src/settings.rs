//! Application configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `COMMUNITIES_*` environment variables
//! and configuration files. Missing values fall back to the accessors below.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;

fn default_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("communities.json")
}

/// Configuration values for the community service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMUNITIES")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Load the seed document into the in-memory repositories on startup.
    pub seed_enabled: Option<bool>,
    /// Optional seed document path override.
    pub seed_path: Option<PathBuf>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Return whether startup seeding runs, defaulting to `true`.
    pub fn seed_enabled(&self) -> bool {
        self.seed_enabled.unwrap_or(true)
    }

    /// Return the configured seed path, falling back to the bundled fixture.
    pub fn seed_path(&self) -> PathBuf {
        self.seed_path.clone().unwrap_or_else(default_seed_path)
    }
}
