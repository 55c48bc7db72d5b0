//! Driving port for membership mutations.
//!
//! Inbound adapters call this port to move a user into or out of a community.
//! Implementations enforce the single-membership invariant and return the
//! typed [`MembershipError`] so adapters can render a precise response.

use async_trait::async_trait;

use crate::domain::{CommunityId, MembershipError, User, UserId};

/// Domain use-case port for joining and leaving communities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipCommand: Send + Sync {
    /// Move an unaffiliated user into `community_id`.
    async fn join(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> Result<User, MembershipError>;

    /// Remove a user from `community_id`, which must be their current one.
    async fn leave(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> Result<User, MembershipError>;
}
