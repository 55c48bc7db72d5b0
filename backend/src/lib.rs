//! Community membership and experience leaderboard service.
//!
//! The domain keeps every user in at most one community and ranks
//! communities by the summed experience of their members. HTTP handlers,
//! in-memory storage and startup seeding sit around it as adapters.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
