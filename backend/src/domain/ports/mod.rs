//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod community_repository;
mod leaderboard_query;
mod membership_command;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use community_repository::MockCommunityRepository;
pub use community_repository::{CommunityPersistenceError, CommunityRepository};
pub use leaderboard_query::LeaderboardQuery;
#[cfg(test)]
pub use leaderboard_query::MockLeaderboardQuery;
pub use membership_command::MembershipCommand;
#[cfg(test)]
pub use membership_command::MockMembershipCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
