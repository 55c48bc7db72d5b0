//! Seed document parsing and validation.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Community, CommunityId, User, UserId};

/// Errors raised while parsing or validating a seed document.
#[derive(Debug, Error)]
pub enum SeedDocumentError {
    /// The payload was not a valid seed document.
    #[error("seed document parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two users share an identifier.
    #[error("duplicate user id in seed document: {id}")]
    DuplicateUser {
        /// Repeated identifier.
        id: UserId,
    },
    /// Two communities share an identifier.
    #[error("duplicate community id in seed document: {id}")]
    DuplicateCommunity {
        /// Repeated identifier.
        id: CommunityId,
    },
}

/// Communities and users loaded into the in-memory repositories.
///
/// Both collections keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDocument {
    /// Communities in ranking tie-break order.
    #[serde(default)]
    pub communities: Vec<Community>,
    /// Users with their experience history and membership.
    #[serde(default)]
    pub users: Vec<User>,
}

impl SeedDocument {
    /// Parse and validate a JSON seed document.
    ///
    /// # Examples
    /// ```
    /// use community_backend::example_data::SeedDocument;
    ///
    /// let document = SeedDocument::from_json(r#"{
    ///     "communities": [
    ///         { "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "name": "Pixel Pioneers" }
    ///     ],
    ///     "users": []
    /// }"#).expect("valid document");
    /// assert_eq!(document.communities.len(), 1);
    /// ```
    pub fn from_json(payload: &str) -> Result<Self, SeedDocumentError> {
        let document: Self = serde_json::from_str(payload)?;
        document.validate()?;
        Ok(document)
    }

    fn validate(&self) -> Result<(), SeedDocumentError> {
        let mut community_ids = HashSet::new();
        for community in &self.communities {
            if !community_ids.insert(community.id()) {
                return Err(SeedDocumentError::DuplicateCommunity {
                    id: community.id().clone(),
                });
            }
        }
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id()) {
                return Err(SeedDocumentError::DuplicateUser {
                    id: user.id().clone(),
                });
            }
        }
        Ok(())
    }

    /// Users whose membership names a community missing from the document.
    pub fn unresolved_memberships(&self) -> impl Iterator<Item = &User> {
        let known: HashSet<&CommunityId> = self.communities.iter().map(Community::id).collect();
        self.users.iter().filter(move |user| {
            user.current_community_id()
                .is_some_and(|community_id| !known.contains(community_id))
        })
    }
}
