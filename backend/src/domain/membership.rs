//! Membership state machine.
//!
//! A user is either unaffiliated or a member of exactly one community. The
//! transitions here are pure: they inspect the current state and either yield
//! the next state or name the rule the request broke. Every (state, event)
//! pair has a defined outcome. Storage and logging happen in
//! [`crate::domain::MembershipService`].

use serde_json::json;
use thiserror::Error;

use super::ports::UserPersistenceError;
use super::{CommunityId, Error, User, UserId};

/// Membership of a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipState {
    /// Not a member of any community.
    Unaffiliated,
    /// Member of exactly one community.
    MemberOf(CommunityId),
}

impl MembershipState {
    /// Read the state recorded on a user.
    #[must_use]
    pub fn of(user: &User) -> Self {
        user.current_community_id()
            .map_or(Self::Unaffiliated, |id| Self::MemberOf(id.clone()))
    }

    /// Community the state refers to, if any.
    #[must_use]
    pub fn community_id(&self) -> Option<&CommunityId> {
        match self {
            Self::Unaffiliated => None,
            Self::MemberOf(id) => Some(id),
        }
    }

    /// Consume the state, yielding the value stored in the membership field.
    #[must_use]
    pub fn into_community_id(self) -> Option<CommunityId> {
        match self {
            Self::Unaffiliated => None,
            Self::MemberOf(id) => Some(id),
        }
    }

    /// Apply a join request for `target`.
    ///
    /// Only an unaffiliated user may join. Membership is never transferred
    /// implicitly, and re-joining the current community is rejected.
    ///
    /// # Examples
    /// ```
    /// use community_backend::domain::{CommunityId, MembershipError, MembershipState};
    ///
    /// let c1 = CommunityId::random();
    /// let joined = MembershipState::Unaffiliated.join(&c1).expect("join succeeds");
    /// assert_eq!(joined, MembershipState::MemberOf(c1.clone()));
    /// assert_eq!(
    ///     joined.join(&c1),
    ///     Err(MembershipError::AlreadyMember { community_id: c1 })
    /// );
    /// ```
    pub fn join(&self, target: &CommunityId) -> Result<Self, MembershipError> {
        match self {
            Self::Unaffiliated => Ok(Self::MemberOf(target.clone())),
            Self::MemberOf(current) if current == target => Err(MembershipError::AlreadyMember {
                community_id: current.clone(),
            }),
            Self::MemberOf(current) => Err(MembershipError::AlreadyInDifferentCommunity {
                community_id: current.clone(),
            }),
        }
    }

    /// Apply a leave request naming `named`, which must be the current community.
    pub fn leave(&self, named: &CommunityId) -> Result<Self, MembershipError> {
        match self {
            Self::Unaffiliated => Err(MembershipError::NotInAnyCommunity),
            Self::MemberOf(current) if current == named => Ok(Self::Unaffiliated),
            Self::MemberOf(current) => Err(MembershipError::InDifferentCommunity {
                community_id: current.clone(),
            }),
        }
    }
}

/// Reasons a membership transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// The referenced user does not exist.
    #[error("user {user_id} not found")]
    NotFound {
        /// Identifier that failed to resolve.
        user_id: UserId,
    },
    /// Join named the community the user is already in.
    #[error("user is already part of community {community_id}")]
    AlreadyMember {
        /// The user's current community.
        community_id: CommunityId,
    },
    /// Join was requested while the user belongs to another community.
    #[error("user is already part of a different community: {community_id}")]
    AlreadyInDifferentCommunity {
        /// The user's current community.
        community_id: CommunityId,
    },
    /// Leave was requested while the user is unaffiliated.
    #[error("user is not part of any community")]
    NotInAnyCommunity,
    /// Leave named a community other than the user's current one.
    #[error("user is part of a different community: {community_id}")]
    InDifferentCommunity {
        /// The user's current community.
        community_id: CommunityId,
    },
    /// Storage failed while reading or writing the membership.
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
}

impl MembershipError {
    /// Stable snake-case identifier for the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::AlreadyMember { .. } => "already_member",
            Self::AlreadyInDifferentCommunity { .. } => "already_in_different_community",
            Self::NotInAnyCommunity => "not_in_any_community",
            Self::InDifferentCommunity { .. } => "in_different_community",
            Self::Persistence(_) => "persistence",
        }
    }

    /// Community the user is actually in, when the error kind carries one.
    #[must_use]
    pub fn community_id(&self) -> Option<&CommunityId> {
        match self {
            Self::AlreadyMember { community_id }
            | Self::AlreadyInDifferentCommunity { community_id }
            | Self::InDifferentCommunity { community_id } => Some(community_id),
            Self::NotFound { .. } | Self::NotInAnyCommunity | Self::Persistence(_) => None,
        }
    }

    fn rejection(message: &str, kind: &str, community_id: Option<&CommunityId>) -> Error {
        let details = match community_id {
            Some(id) => json!({ "code": kind, "communityId": id.to_string() }),
            None => json!({ "code": kind }),
        };
        Error::invalid_request(message).with_details(details)
    }
}

impl From<MembershipError> for Error {
    fn from(value: MembershipError) -> Self {
        let kind = value.kind();
        let community_id = value.community_id().cloned();
        match value {
            MembershipError::NotFound { user_id } => Self::not_found("User not found")
                .with_details(json!({ "code": kind, "userId": user_id.to_string() })),
            MembershipError::AlreadyMember { .. } => MembershipError::rejection(
                "User is already part of this community",
                kind,
                community_id.as_ref(),
            ),
            MembershipError::AlreadyInDifferentCommunity { .. } => MembershipError::rejection(
                "User is already part of a different community",
                kind,
                community_id.as_ref(),
            ),
            MembershipError::NotInAnyCommunity => MembershipError::rejection(
                "User is not part of any community",
                kind,
                None,
            ),
            MembershipError::InDifferentCommunity { .. } => MembershipError::rejection(
                "User is part of a different community",
                kind,
                community_id.as_ref(),
            ),
            MembershipError::Persistence(error) => error.into(),
        }
    }
}
