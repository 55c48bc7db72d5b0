//! Users and membership API handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/{userId}
//! POST /api/v1/users/{userId}/join/{communityId}
//! DELETE /api/v1/users/{userId}/leave/{communityId}
//! ```

use actix_web::{delete, get, post, web};

use crate::domain::{Error, User, UserSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_community_id, parse_user_id};

/// List every user with their experience total.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use community_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSummary]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserSummary>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user including the full experience history.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}",
    params(("userId" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{userId}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let user = state.users.get_user(&user_id).await?;
    Ok(web::Json(user))
}

/// Join a community. Only users outside every community may join.
#[utoipa::path(
    post,
    path = "/api/v1/users/{userId}/join/{communityId}",
    params(
        ("userId" = String, Path, description = "User identifier (UUID)"),
        ("communityId" = String, Path, description = "Community to join (UUID)")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Membership rule violated or malformed identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["membership"],
    operation_id = "joinCommunity"
)]
#[post("/users/{userId}/join/{communityId}")]
pub async fn join_community(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<User>> {
    let (user_id, community_id) = path.into_inner();
    let user_id = parse_user_id(&user_id)?;
    let community_id = parse_community_id(&community_id)?;
    let user = state.membership.join(&user_id, &community_id).await?;
    Ok(web::Json(user))
}

/// Leave the community the user currently belongs to.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{userId}/leave/{communityId}",
    params(
        ("userId" = String, Path, description = "User identifier (UUID)"),
        ("communityId" = String, Path, description = "Community to leave (UUID)")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Membership rule violated or malformed identifier", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["membership"],
    operation_id = "leaveCommunity"
)]
#[delete("/users/{userId}/leave/{communityId}")]
pub async fn leave_community(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<User>> {
    let (user_id, community_id) = path.into_inner();
    let user_id = parse_user_id(&user_id)?;
    let community_id = parse_community_id(&community_id)?;
    let user = state.membership.leave(&user_id, &community_id).await?;
    Ok(web::Json(user))
}
