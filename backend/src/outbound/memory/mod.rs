//! In-process repositories backed by ordered vectors.
//!
//! Records keep insertion order, which the leaderboard relies on for
//! tie-breaking. Each write happens under a single lock acquisition.

mod community_repository;
mod user_repository;

pub use community_repository::InMemoryCommunityRepository;
pub use user_repository::InMemoryUserRepository;
