//! Domain primitives, rules and services.
//!
//! Purpose: Define the strongly typed entities that describe users,
//! communities and experience awards, the membership state machine that keeps
//! each user in at most one community, and the leaderboard fold that ranks
//! communities by member experience. Adapters reach this layer only through
//! the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - User, Community, ExperienceAward: stored entities.
//! - MembershipState / MembershipError: join and leave transitions.
//! - compute_leaderboard / LeaderboardRow: community ranking.
//! - MembershipService, LeaderboardService, UsersService: port implementations.

pub mod community;
pub mod error;
pub mod experience;
pub mod leaderboard;
mod leaderboard_service;
pub mod membership;
mod membership_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_summary;
mod users_service;

pub use self::community::{Community, CommunityId, CommunityValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::experience::{ExperienceAward, total_points};
pub use self::leaderboard::{LeaderboardRow, LeaderboardSnapshot, compute_leaderboard};
pub use self::leaderboard_service::LeaderboardService;
pub use self::membership::{MembershipError, MembershipState};
pub use self::membership_service::MembershipService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError};
pub use self::user_summary::UserSummary;
pub use self::users_service::UsersService;

