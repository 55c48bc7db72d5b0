//! Leaderboard domain service.
//!
//! Loads both collections through their repositories and hands them to the
//! pure aggregation in [`crate::domain::leaderboard`]. The two reads are not
//! taken as one snapshot; the ranking reflects the data as observed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::leaderboard::aggregate;
use crate::domain::ports::{CommunityRepository, LeaderboardQuery, UserRepository};
use crate::domain::{Error, LeaderboardRow};

/// Leaderboard service implementing the driving port.
pub struct LeaderboardService<U, C> {
    users: Arc<U>,
    communities: Arc<C>,
}

impl<U, C> LeaderboardService<U, C> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, communities: Arc<C>) -> Self {
        Self { users, communities }
    }
}

#[async_trait]
impl<U, C> LeaderboardQuery for LeaderboardService<U, C>
where
    U: UserRepository,
    C: CommunityRepository,
{
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, Error> {
        let communities = self.communities.list_communities().await?;
        let users = self.users.list_users().await?;

        let snapshot = aggregate(&users, &communities);
        if snapshot.unresolved_members > 0 {
            warn!(
                unresolved_members = snapshot.unresolved_members,
                "users reference communities that are not listed"
            );
        }
        debug!(
            communities = communities.len(),
            users = users.len(),
            "leaderboard computed"
        );
        Ok(snapshot.rows)
    }
}
