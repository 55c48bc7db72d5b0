//! In-memory adapter for the community repository port.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Community;
use crate::domain::ports::{CommunityPersistenceError, CommunityRepository};

/// Community storage held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCommunityRepository {
    communities: RwLock<Vec<Community>>,
}

impl InMemoryCommunityRepository {
    /// Create a repository seeded with `communities` in the given order.
    pub fn new(communities: Vec<Community>) -> Self {
        Self {
            communities: RwLock::new(communities),
        }
    }
}

#[async_trait]
impl CommunityRepository for InMemoryCommunityRepository {
    async fn list_communities(&self) -> Result<Vec<Community>, CommunityPersistenceError> {
        Ok(self.communities.read().await.clone())
    }
}
