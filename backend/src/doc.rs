//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler under `inbound::http` together with the
//! domain payload types. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Community, Error, ErrorCode, ExperienceAward, LeaderboardRow, User, UserSummary,
};
use crate::inbound::http::leaderboard::LeaderboardEntry;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Community leaderboard API",
        description = "Community membership and experience leaderboard endpoints.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::join_community,
        crate::inbound::http::users::leave_community,
        crate::inbound::http::communities::list_communities,
        crate::inbound::http::leaderboard::get_leaderboard,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        UserSummary,
        ExperienceAward,
        Community,
        LeaderboardRow,
        LeaderboardEntry
    )),
    tags(
        (name = "users", description = "User lookups"),
        (name = "membership", description = "Joining and leaving communities"),
        (name = "communities", description = "Communities and their ranking"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
