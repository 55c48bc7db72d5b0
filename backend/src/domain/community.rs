//! Community data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned when building communities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityValidationError {
    /// The identifier was empty.
    EmptyId,
    /// The identifier was not a UUID.
    InvalidId,
    /// The community name was blank.
    EmptyName,
}

impl fmt::Display for CommunityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "community id must not be empty"),
            Self::InvalidId => write!(f, "community id must be a valid UUID"),
            Self::EmptyName => write!(f, "community name must not be empty"),
        }
    }
}

impl std::error::Error for CommunityValidationError {}

/// Stable community identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommunityId(Uuid);

impl CommunityId {
    /// Validate and construct a [`CommunityId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CommunityValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(CommunityValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(CommunityValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| CommunityValidationError::InvalidId)
    }

    /// Generate a new random [`CommunityId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CommunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CommunityId> for String {
    fn from(value: CommunityId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for CommunityId {
    type Error = CommunityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A community users can join.
///
/// ## Invariants
/// - `name` is non-empty once trimmed of whitespace.
///
/// Communities hold no list of members; membership is recorded on each
/// [`crate::domain::User`] and derived by scanning users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "CommunityDto", into = "CommunityDto")]
pub struct Community {
    #[schema(value_type = String, format = Uuid)]
    id: CommunityId,
    #[schema(example = "Pixel Pioneers")]
    name: String,
    #[schema(example = "https://example.com/logo.png")]
    logo: Option<String>,
}

impl Community {
    /// Fallible constructor enforcing the name invariant.
    ///
    /// # Examples
    /// ```
    /// use community_backend::domain::{Community, CommunityId};
    ///
    /// let community = Community::try_new(CommunityId::random(), "Pixel Pioneers")
    ///     .expect("valid community");
    /// assert_eq!(community.name(), "Pixel Pioneers");
    /// assert!(Community::try_new(CommunityId::random(), "  ").is_err());
    /// ```
    pub fn try_new(
        id: CommunityId,
        name: impl Into<String>,
    ) -> Result<Self, CommunityValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommunityValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            logo: None,
        })
    }

    /// Attach a logo URL.
    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Stable community identifier.
    #[must_use]
    pub fn id(&self) -> &CommunityId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Logo URL, if any.
    #[must_use]
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommunityDto {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
}

impl From<Community> for CommunityDto {
    fn from(value: Community) -> Self {
        let Community { id, name, logo } = value;
        Self {
            id: id.into(),
            name,
            logo,
        }
    }
}

impl TryFrom<CommunityDto> for Community {
    type Error = CommunityValidationError;

    fn try_from(value: CommunityDto) -> Result<Self, Self::Error> {
        let CommunityDto { id, name, logo } = value;
        let community = Self::try_new(CommunityId::new(id)?, name)?;
        Ok(match logo {
            Some(logo) => community.with_logo(logo),
            None => community,
        })
    }
}
