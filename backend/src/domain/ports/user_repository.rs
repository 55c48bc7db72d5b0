//! Port abstraction for user persistence adapters and their errors.
//!
//! This is the full set of storage capabilities the membership and
//! leaderboard logic needs from user storage: point lookup, the single
//! membership mutation primitive, and a full listing.

use async_trait::async_trait;

use crate::domain::{CommunityId, Error, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection => "user repository connection failed",
        /// Query or mutation failed during execution.
        Query => "user repository query failed",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(value: UserPersistenceError) -> Self {
        match value {
            UserPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Self::internal(format!("user repository error: {message}"))
            }
        }
    }
}

/// Driven port for user storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier. `None` means the user does not exist.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite the user's membership field and return the updated record.
    ///
    /// Passing `None` clears the membership. Returns `None` when the user does
    /// not exist. Adapters apply the write as a single operation; callers are
    /// responsible for serialising read-check-write sequences per user.
    async fn update_membership(
        &self,
        id: &UserId,
        community_id: Option<CommunityId>,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Return every user in storage order.
    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError>;
}
