//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::{info, warn};

use super::document::{SeedDocument, SeedDocumentError};
use crate::settings::AppSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read seed document at {path}: {source}")]
    Read {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed document was malformed or inconsistent.
    #[error("invalid seed document at {path}: {source}")]
    Document {
        /// Path to the seed file.
        path: PathBuf,
        /// Parse or validation failure.
        #[source]
        source: SeedDocumentError,
    },
}

/// Load the seed document when seeding is enabled.
///
/// Returns an empty document when seeding is disabled so the server starts
/// with empty repositories.
///
/// # Examples
///
/// ```rust,no_run
/// use community_backend::example_data::seed_on_startup;
/// use community_backend::settings::AppSettings;
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = AppSettings {
///     bind_addr: None,
///     seed_enabled: Some(false),
///     seed_path: None,
/// };
/// let document = seed_on_startup(&settings)?;
/// assert!(document.users.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn seed_on_startup(settings: &AppSettings) -> Result<SeedDocument, StartupSeedingError> {
    if !settings.seed_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(SeedDocument::default());
    }

    let path = settings.seed_path();
    let document = load_seed_document(&path)?;

    for user in document.unresolved_memberships() {
        warn!(
            user_id = %user.id(),
            community_id = ?user.current_community_id().map(ToString::to_string),
            "seeded user references an unknown community"
        );
    }
    info!(
        path = %path.display(),
        communities = document.communities.len(),
        users = document.users.len(),
        "example data seeding applied"
    );
    Ok(document)
}

/// Read and validate a seed document from `path`.
pub fn load_seed_document(path: &Path) -> Result<SeedDocument, StartupSeedingError> {
    let contents = read_to_string(path).map_err(|source| StartupSeedingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SeedDocument::from_json(&contents).map_err(|source| StartupSeedingError::Document {
        path: path.to_path_buf(),
        source,
    })
}

fn read_to_string(path: &Path) -> std::io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    let payload = dir.read(Path::new(file_name))?;
    String::from_utf8(payload)
        .map_err(|source| std::io::Error::new(std::io::ErrorKind::InvalidData, source))
}
