//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::experience::{ExperienceAward, total_points};
use super::CommunityId;

/// Validation errors returned when parsing user identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier was empty.
    EmptyId,
    /// The identifier was not a UUID.
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user together with their membership and experience history.
///
/// ## Invariants
/// - `current_community_id` holds at most one community; `None` means the
///   user is unaffiliated.
/// - `experience_points` is append-only; the domain never edits past awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[schema(example = "ada@example.com")]
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_picture: Option<String>,
    #[serde(default)]
    experience_points: Vec<ExperienceAward>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Uuid)]
    current_community_id: Option<CommunityId>,
}

impl User {
    /// Build an unaffiliated user with an empty experience history.
    ///
    /// # Examples
    /// ```
    /// use community_backend::domain::{ExperienceAward, User, UserId};
    ///
    /// let user = User::new(UserId::random(), "ada@example.com")
    ///     .with_experience(vec![ExperienceAward::new(5), ExperienceAward::new(10)]);
    /// assert_eq!(user.total_experience(), 15);
    /// assert!(user.current_community_id().is_none());
    /// ```
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            profile_picture: None,
            experience_points: Vec::new(),
            current_community_id: None,
        }
    }

    /// Attach a profile picture URL.
    #[must_use]
    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    /// Replace the experience history.
    #[must_use]
    pub fn with_experience(mut self, awards: Vec<ExperienceAward>) -> Self {
        self.experience_points = awards;
        self
    }

    /// Place the user in a community.
    #[must_use]
    pub fn in_community(mut self, community_id: CommunityId) -> Self {
        self.current_community_id = Some(community_id);
        self
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Contact email, passed through untouched.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Profile picture URL, if any.
    #[must_use]
    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture.as_deref()
    }

    /// Experience awards in the order they were granted.
    #[must_use]
    pub fn experience_points(&self) -> &[ExperienceAward] {
        &self.experience_points
    }

    /// Community the user currently belongs to.
    #[must_use]
    pub fn current_community_id(&self) -> Option<&CommunityId> {
        self.current_community_id.as_ref()
    }

    /// Sum of every award in the user's history.
    #[must_use]
    pub fn total_experience(&self) -> u64 {
        total_points(&self.experience_points)
    }

    /// Overwrite the membership field. Only storage adapters call this; the
    /// transition rules live in [`crate::domain::membership`].
    pub(crate) fn set_current_community(&mut self, community_id: Option<CommunityId>) {
        self.current_community_id = community_id;
    }
}
