//! User query service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{UserRepository, UsersQuery};
use crate::domain::{Error, User, UserId, UserSummary};

/// Read-side service implementing [`UsersQuery`].
pub struct UsersService<U> {
    users: Arc<U>,
}

impl<U> UsersService<U> {
    /// Create a new service over the given user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UsersQuery for UsersService<U>
where
    U: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<UserSummary>, Error> {
        let users = self.users.list_users().await?;
        Ok(users.iter().map(UserSummary::from).collect())
    }

    async fn get_user(&self, id: &UserId) -> Result<User, Error> {
        self.users.find_by_id(id).await?.ok_or_else(|| {
            Error::not_found("User not found").with_details(json!({ "userId": id.to_string() }))
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::ExperienceAward;

    #[tokio::test]
    async fn list_users_summarises_every_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().times(1).return_once(|| {
            Ok(vec![
                User::new(UserId::random(), "a@example.com")
                    .with_experience(vec![ExperienceAward::new(3)]),
                User::new(UserId::random(), "b@example.com"),
            ])
        });

        let summaries = UsersService::new(Arc::new(repo))
            .list_users()
            .await
            .expect("list");

        let totals: Vec<_> = summaries.iter().map(|s| s.total_experience).collect();
        assert_eq!(totals, [3, 0]);
    }

    #[tokio::test]
    async fn get_user_reports_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let error = UsersService::new(Arc::new(repo))
            .get_user(&UserId::random())
            .await
            .expect_err("missing");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
