//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user-visible data
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserSummary};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user with their experience total.
    async fn list_users(&self) -> Result<Vec<UserSummary>, Error>;

    /// Return one user including the full experience history.
    async fn get_user(&self, id: &UserId) -> Result<User, Error>;
}
