//! Read model for user listings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CommunityId, User, UserId};

/// A user with their experience history collapsed into a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User identifier.
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
    /// Contact email.
    pub email: String,
    /// Profile picture URL, if any.
    pub profile_picture: Option<String>,
    /// Sum of every award; zero for an empty history.
    pub total_experience: u64,
    /// Community the user currently belongs to.
    #[schema(value_type = Option<String>, format = Uuid)]
    pub current_community_id: Option<CommunityId>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().clone(),
            email: user.email().to_owned(),
            profile_picture: user.profile_picture().map(str::to_owned),
            total_experience: user.total_experience(),
            current_community_id: user.current_community_id().cloned(),
        }
    }
}
