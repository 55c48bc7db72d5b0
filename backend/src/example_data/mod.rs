//! Startup wiring for example data seeding.

mod document;
mod startup;

pub use document::{SeedDocument, SeedDocumentError};
pub use startup::{StartupSeedingError, load_seed_document, seed_on_startup};
