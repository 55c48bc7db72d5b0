//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CommunityRepository, LeaderboardQuery, MembershipCommand, UserRepository, UsersQuery,
};
use crate::domain::{LeaderboardService, MembershipService, UsersService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User listing and lookup.
    pub users: Arc<dyn UsersQuery>,
    /// Join and leave transitions.
    pub membership: Arc<dyn MembershipCommand>,
    /// Community ranking.
    pub leaderboard: Arc<dyn LeaderboardQuery>,
    /// Community listing; no service sits between handler and storage.
    pub communities: Arc<dyn CommunityRepository>,
}

impl HttpState {
    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use community_backend::inbound::http::state::HttpState;
    /// use community_backend::outbound::memory::{
    ///     InMemoryCommunityRepository, InMemoryUserRepository,
    /// };
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(InMemoryCommunityRepository::default()),
    /// );
    /// let _leaderboard = state.leaderboard.clone();
    /// ```
    pub fn from_repositories<U, C>(users: Arc<U>, communities: Arc<C>) -> Self
    where
        U: UserRepository + 'static,
        C: CommunityRepository + 'static,
    {
        Self {
            users: Arc::new(UsersService::new(Arc::clone(&users))),
            membership: Arc::new(MembershipService::new(Arc::clone(&users))),
            leaderboard: Arc::new(LeaderboardService::new(users, Arc::clone(&communities))),
            communities,
        }
    }
}
