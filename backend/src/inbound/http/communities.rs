//! Community listing handler.

use actix_web::{get, web};

use crate::domain::{Community, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List communities in storage order.
#[utoipa::path(
    get,
    path = "/api/v1/communities",
    responses(
        (status = 200, description = "Communities", body = [Community]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["communities"],
    operation_id = "listCommunities"
)]
#[get("/communities")]
pub async fn list_communities(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Community>>> {
    let communities = state.communities.list_communities().await?;
    Ok(web::Json(communities))
}
