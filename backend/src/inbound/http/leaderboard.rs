//! Community leaderboard handler.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LeaderboardRow};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Leaderboard row with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Position in the ranking, starting at 1.
    pub rank: usize,
    /// Community identifier.
    #[schema(format = Uuid)]
    pub community_id: String,
    /// Community logo URL.
    pub logo: Option<String>,
    /// Community display name.
    pub name: String,
    /// Sum of every award held by current members.
    pub total_experience_points: u64,
    /// Number of current members.
    pub member_count: u64,
}

impl LeaderboardEntry {
    fn ranked(index: usize, row: LeaderboardRow) -> Self {
        let LeaderboardRow {
            community_id,
            logo,
            name,
            total_experience_points,
            member_count,
        } = row;
        Self {
            rank: index + 1,
            community_id: community_id.to_string(),
            logo,
            name,
            total_experience_points,
            member_count,
        }
    }
}

/// Rank every community by the total experience of its current members.
///
/// Communities without members are listed with zero totals. Equal totals
/// keep storage order.
#[utoipa::path(
    get,
    path = "/api/v1/leaderboard",
    responses(
        (status = 200, description = "Ranked communities", body = [LeaderboardEntry]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["communities"],
    operation_id = "getLeaderboard"
)]
#[get("/leaderboard")]
pub async fn get_leaderboard(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<LeaderboardEntry>>> {
    let rows = state.leaderboard.leaderboard().await?;
    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| LeaderboardEntry::ranked(index, row))
        .collect();
    Ok(web::Json(entries))
}
