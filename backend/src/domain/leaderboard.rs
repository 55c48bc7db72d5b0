//! Community leaderboard aggregation.
//!
//! Folds the user collection into per-community totals and ranks every
//! community by the summed experience of its current members. The fold is
//! pure and recomputed on every request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Community, CommunityId, User};

/// One community's aggregate standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// Community identifier.
    #[schema(value_type = String, format = Uuid)]
    pub community_id: CommunityId,
    /// Logo URL copied from the community.
    pub logo: Option<String>,
    /// Display name copied from the community.
    pub name: String,
    /// Sum of every award held by current members.
    pub total_experience_points: u64,
    /// Number of users whose membership points at this community.
    pub member_count: u64,
}

impl LeaderboardRow {
    fn empty(community: &Community) -> Self {
        Self {
            community_id: community.id().clone(),
            logo: community.logo().map(str::to_owned),
            name: community.name().to_owned(),
            total_experience_points: 0,
            member_count: 0,
        }
    }
}

/// Ranked rows plus the number of members whose community was not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSnapshot {
    /// Rows ordered by rank; index 0 is rank 1.
    pub rows: Vec<LeaderboardRow>,
    /// Users whose membership names a community absent from the input.
    pub unresolved_members: usize,
}

/// Rank communities by the total experience of their current members.
///
/// Every community yields exactly one row, including communities without
/// members. Rows with equal totals keep the order of `communities`.
///
/// # Examples
/// ```
/// use community_backend::domain::{
///     Community, CommunityId, ExperienceAward, User, UserId, compute_leaderboard,
/// };
///
/// let a = Community::try_new(CommunityId::random(), "Alpha").expect("valid community");
/// let b = Community::try_new(CommunityId::random(), "Beta").expect("valid community");
/// let users = vec![
///     User::new(UserId::random(), "ada@example.com")
///         .with_experience(vec![ExperienceAward::new(5), ExperienceAward::new(10)])
///         .in_community(a.id().clone()),
///     User::new(UserId::random(), "bob@example.com")
///         .with_experience(vec![ExperienceAward::new(3)])
///         .in_community(a.id().clone()),
/// ];
///
/// let rows = compute_leaderboard(&users, &[b.clone(), a.clone()]);
/// assert_eq!(rows[0].community_id, *a.id());
/// assert_eq!(rows[0].total_experience_points, 18);
/// assert_eq!(rows[0].member_count, 2);
/// assert_eq!(rows[1].community_id, *b.id());
/// assert_eq!(rows[1].member_count, 0);
/// ```
#[must_use]
pub fn compute_leaderboard(users: &[User], communities: &[Community]) -> Vec<LeaderboardRow> {
    aggregate(users, communities).rows
}

/// Same as [`compute_leaderboard`], also counting members of unknown communities.
#[must_use]
pub fn aggregate(users: &[User], communities: &[Community]) -> LeaderboardSnapshot {
    let mut rows: Vec<LeaderboardRow> = communities.iter().map(LeaderboardRow::empty).collect();
    let index: HashMap<&CommunityId, usize> = communities
        .iter()
        .enumerate()
        .map(|(position, community)| (community.id(), position))
        .collect();

    let mut unresolved_members = 0;
    for user in users {
        let Some(community_id) = user.current_community_id() else {
            continue;
        };
        let Some(row) = index
            .get(community_id)
            .and_then(|position| rows.get_mut(*position))
        else {
            unresolved_members += 1;
            continue;
        };
        row.total_experience_points = row
            .total_experience_points
            .saturating_add(user.total_experience());
        row.member_count += 1;
    }

    // `sort_by` is stable, so equal totals keep input order.
    rows.sort_by(|left, right| right.total_experience_points.cmp(&left.total_experience_points));

    LeaderboardSnapshot {
        rows,
        unresolved_members,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{ExperienceAward, UserId};
    use rstest::rstest;

    fn community(id: &str, name: &str) -> Community {
        Community::try_new(CommunityId::new(id).expect("valid id"), name).expect("valid community")
    }

    fn member(community: &Community, points: &[u32]) -> User {
        User::new(UserId::random(), "member@example.com")
            .with_experience(points.iter().copied().map(ExperienceAward::new).collect())
            .in_community(community.id().clone())
    }

    const A: &str = "aaaaaaaa-0000-4000-8000-000000000001";
    const B: &str = "bbbbbbbb-0000-4000-8000-000000000002";
    const C: &str = "cccccccc-0000-4000-8000-000000000003";

    #[rstest]
    fn sums_member_awards_and_keeps_empty_communities() {
        let a = community(A, "Alpha");
        let b = community(B, "Beta");
        let users = vec![member(&a, &[5, 10]), member(&a, &[3])];

        let rows = compute_leaderboard(&users, &[a.clone(), b.clone()]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].community_id, *a.id());
        assert_eq!(rows[0].total_experience_points, 18);
        assert_eq!(rows[0].member_count, 2);
        assert_eq!(rows[1].community_id, *b.id());
        assert_eq!(rows[1].total_experience_points, 0);
        assert_eq!(rows[1].member_count, 0);
    }

    #[rstest]
    fn equal_totals_keep_input_order() {
        let a = community(A, "Alpha");
        let b = community(B, "Beta");
        let c = community(C, "Gamma");
        let users = vec![member(&c, &[7]), member(&b, &[4]), member(&a, &[4])];

        let rows = compute_leaderboard(&users, &[b.clone(), a.clone(), c.clone()]);
        let order: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();

        assert_eq!(order, ["Gamma", "Beta", "Alpha"]);
    }

    #[rstest]
    fn empty_history_counts_as_member_with_zero_points() {
        let a = community(A, "Alpha");
        let users = vec![member(&a, &[])];

        let rows = compute_leaderboard(&users, &[a]);

        assert_eq!(rows[0].total_experience_points, 0);
        assert_eq!(rows[0].member_count, 1);
    }

    #[rstest]
    fn single_member_outranks_empty_community() {
        let c1 = community(A, "c1");
        let c2 = community(B, "c2");
        let users = vec![member(&c1, &[8])];

        let rows = compute_leaderboard(&users, &[c1.clone(), c2.clone()]);

        assert_eq!(
            rows,
            vec![
                LeaderboardRow {
                    community_id: c1.id().clone(),
                    logo: None,
                    name: "c1".into(),
                    total_experience_points: 8,
                    member_count: 1,
                },
                LeaderboardRow {
                    community_id: c2.id().clone(),
                    logo: None,
                    name: "c2".into(),
                    total_experience_points: 0,
                    member_count: 0,
                },
            ]
        );
    }

    #[rstest]
    fn unaffiliated_users_are_ignored() {
        let a = community(A, "Alpha");
        let loner = User::new(UserId::random(), "loner@example.com")
            .with_experience(vec![ExperienceAward::new(100)]);

        let snapshot = aggregate(&[loner], &[a]);

        assert_eq!(snapshot.rows[0].total_experience_points, 0);
        assert_eq!(snapshot.unresolved_members, 0);
    }

    #[rstest]
    fn members_of_unknown_communities_are_counted_separately() {
        let a = community(A, "Alpha");
        let ghost = community(B, "Ghost");
        let users = vec![member(&a, &[2]), member(&ghost, &[50])];

        let snapshot = aggregate(&users, &[a]);

        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.rows[0].total_experience_points, 2);
        assert_eq!(snapshot.unresolved_members, 1);
    }

    #[rstest]
    fn logo_is_copied_into_row() {
        let a = community(A, "Alpha").with_logo("https://cdn.example.com/a.png");

        let rows = compute_leaderboard(&[], &[a]);

        assert_eq!(rows[0].logo.as_deref(), Some("https://cdn.example.com/a.png"));
    }

    #[rstest]
    fn no_communities_yields_no_rows() {
        let stray = User::new(UserId::random(), "x@example.com")
            .in_community(CommunityId::random());
        let snapshot = aggregate(&[stray], &[]);
        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.unresolved_members, 1);
    }

    #[rstest]
    fn row_serialises_in_camel_case() {
        let a = community(A, "Alpha");
        let rows = compute_leaderboard(&[member(&a, &[1])], &[a]);
        let value = serde_json::to_value(&rows[0]).expect("serialise");
        assert_eq!(value["communityId"], A);
        assert_eq!(value["totalExperiencePoints"], 1);
        assert_eq!(value["memberCount"], 1);
    }
}
