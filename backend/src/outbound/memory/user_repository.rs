//! In-memory adapter for the user repository port.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{CommunityId, User, UserId};

/// User storage held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a repository seeded with `users` in the given order.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn update_membership(
        &self,
        id: &UserId,
        community_id: Option<CommunityId>,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|user| user.id() == id).map(|user| {
            user.set_current_community(community_id);
            user.clone()
        }))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.users.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ada() -> User {
        User::new(UserId::random(), "ada@example.com")
    }

    #[rstest]
    #[tokio::test]
    async fn finds_seeded_user(ada: User) {
        let repo = InMemoryUserRepository::new(vec![ada.clone()]);
        let found = repo.find_by_id(ada.id()).await.expect("lookup");
        assert_eq!(found, Some(ada));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_user_is_absent() {
        let repo = InMemoryUserRepository::default();
        let found = repo.find_by_id(&UserId::random()).await.expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn update_membership_sets_and_clears(ada: User) {
        let repo = InMemoryUserRepository::new(vec![ada.clone()]);
        let community_id = CommunityId::random();

        let joined = repo
            .update_membership(ada.id(), Some(community_id.clone()))
            .await
            .expect("update")
            .expect("user exists");
        assert_eq!(joined.current_community_id(), Some(&community_id));

        let cleared = repo
            .update_membership(ada.id(), None)
            .await
            .expect("update")
            .expect("user exists");
        assert!(cleared.current_community_id().is_none());

        let stored = repo.find_by_id(ada.id()).await.expect("lookup");
        assert_eq!(stored, Some(cleared));
    }

    #[rstest]
    #[tokio::test]
    async fn update_membership_for_unknown_user_returns_none() {
        let repo = InMemoryUserRepository::default();
        let result = repo
            .update_membership(&UserId::random(), Some(CommunityId::random()))
            .await
            .expect("update");
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_users_keeps_insertion_order(ada: User) {
        let bob = User::new(UserId::random(), "bob@example.com");
        let repo = InMemoryUserRepository::new(vec![bob.clone(), ada.clone()]);
        let listed = repo.list_users().await.expect("list");
        assert_eq!(listed, vec![bob, ada]);
    }
}
