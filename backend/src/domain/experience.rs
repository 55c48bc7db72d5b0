//! Experience awards recorded against a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry in a user's experience history.
///
/// Points are unsigned so a negative award cannot be represented; the history
/// is append-only and entries are never edited once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceAward {
    /// Points granted by this award.
    #[schema(example = 25)]
    pub points: u32,
    /// When the award was granted, if the source recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarded_at: Option<DateTime<Utc>>,
}

impl ExperienceAward {
    /// Build an award without a timestamp.
    #[must_use]
    pub fn new(points: u32) -> Self {
        Self {
            points,
            awarded_at: None,
        }
    }

    /// Attach the time the award was granted.
    #[must_use]
    pub fn awarded_at(mut self, at: DateTime<Utc>) -> Self {
        self.awarded_at = Some(at);
        self
    }
}

/// Sum the points of an award history. An empty history totals zero.
///
/// # Examples
/// ```
/// use community_backend::domain::{ExperienceAward, total_points};
///
/// let awards = [ExperienceAward::new(5), ExperienceAward::new(10)];
/// assert_eq!(total_points(&awards), 15);
/// assert_eq!(total_points(&[]), 0);
/// ```
#[must_use]
pub fn total_points(awards: &[ExperienceAward]) -> u64 {
    awards
        .iter()
        .map(|award| u64::from(award.points))
        .fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(&[], 0)]
    #[case(&[8], 8)]
    #[case(&[5, 10, 3], 18)]
    #[case(&[u32::MAX, u32::MAX], 2 * u64::from(u32::MAX))]
    fn totals_sum_every_award(#[case] points: &[u32], #[case] expected: u64) {
        let awards: Vec<ExperienceAward> = points.iter().copied().map(ExperienceAward::new).collect();
        assert_eq!(total_points(&awards), expected);
    }

    #[rstest]
    fn negative_points_are_rejected_on_deserialisation() {
        let result = serde_json::from_value::<ExperienceAward>(json!({ "points": -4 }));
        assert!(result.is_err());
    }

    #[rstest]
    fn timestamp_is_optional() {
        let award: ExperienceAward =
            serde_json::from_value(json!({ "points": 3 })).expect("award without timestamp");
        assert_eq!(award, ExperienceAward::new(3));
    }
}
