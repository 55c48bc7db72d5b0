//! Membership domain service.
//!
//! Implements [`MembershipCommand`] on top of a [`UserRepository`]. Each
//! request runs a read-check-write sequence under a per-user lock so two
//! concurrent joins for the same user cannot both observe the unaffiliated
//! state. Requests for different users proceed independently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{info, warn};

use crate::domain::ports::{MembershipCommand, UserRepository};
use crate::domain::{CommunityId, MembershipError, MembershipState, User, UserId};

/// Membership service implementing the driving port.
pub struct MembershipService<R> {
    users: Arc<R>,
    locks: UserLocks,
}

impl<R> MembershipService<R> {
    /// Create a new service over the given user repository.
    pub fn new(users: Arc<R>) -> Self {
        Self {
            users,
            locks: UserLocks::default(),
        }
    }
}

impl<R> MembershipService<R>
where
    R: UserRepository,
{
    async fn apply<F>(
        &self,
        action: &'static str,
        user_id: &UserId,
        community_id: &CommunityId,
        transition: F,
    ) -> Result<User, MembershipError>
    where
        F: FnOnce(&MembershipState) -> Result<MembershipState, MembershipError> + Send,
    {
        let _guard = self.locks.acquire(user_id).await;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| MembershipError::NotFound {
                user_id: user_id.clone(),
            })?;

        let current = MembershipState::of(&user);
        let next = transition(&current).inspect_err(|error| {
            warn!(
                action,
                user_id = %user_id,
                community_id = %community_id,
                kind = error.kind(),
                "membership request rejected"
            );
        })?;

        let updated = self
            .users
            .update_membership(user_id, next.into_community_id())
            .await?
            .ok_or_else(|| MembershipError::NotFound {
                user_id: user_id.clone(),
            })?;

        info!(
            action,
            user_id = %user_id,
            community_id = %community_id,
            "membership updated"
        );
        Ok(updated)
    }
}

#[async_trait]
impl<R> MembershipCommand for MembershipService<R>
where
    R: UserRepository,
{
    async fn join(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> Result<User, MembershipError> {
        self.apply("join", user_id, community_id, |state| {
            state.join(community_id)
        })
        .await
    }

    async fn leave(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> Result<User, MembershipError> {
        self.apply("leave", user_id, community_id, |state| {
            state.leave(community_id)
        })
        .await
    }
}

/// Lazily created async locks keyed by user.
///
/// Every caller registers on the entry before waiting, and the entry is
/// removed when the last registration drops, whether it held the lock, was
/// still waiting, or was cancelled after being handed the lock.
#[derive(Default)]
struct UserLocks {
    inner: Mutex<HashMap<UserId, LockEntry>>,
}

struct LockEntry {
    lock: Arc<AsyncMutex<()>>,
    registrations: usize,
}

impl UserLocks {
    async fn acquire(&self, user_id: &UserId) -> UserLockGuard<'_> {
        let mut registration = self.register(user_id);
        let guard = Arc::clone(&registration.lock).lock_owned().await;
        registration.guard = Some(guard);
        registration
    }

    fn register(&self, user_id: &UserId) -> UserLockGuard<'_> {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = map.entry(user_id.clone()).or_insert_with(|| LockEntry {
            lock: Arc::default(),
            registrations: 0,
        });
        entry.registrations += 1;
        UserLockGuard {
            locks: self,
            user_id: user_id.clone(),
            lock: Arc::clone(&entry.lock),
            guard: None,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

struct UserLockGuard<'a> {
    locks: &'a UserLocks,
    user_id: UserId,
    lock: Arc<AsyncMutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for UserLockGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut map = self
            .locks
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = map.get_mut(&self.user_id) else {
            return;
        };
        entry.registrations = entry.registrations.saturating_sub(1);
        if entry.registrations == 0 {
            map.remove(&self.user_id);
        }
    }
}

#[cfg(test)]
#[path = "membership_service_tests.rs"]
mod tests;
