//! Driving port for the community leaderboard.

use async_trait::async_trait;

use crate::domain::{Error, LeaderboardRow};

/// Domain use-case port returning a freshly computed ranking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// Rank every community by the total experience of its current members.
    ///
    /// Index 0 holds rank 1. Nothing is cached between calls.
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, Error>;
}
