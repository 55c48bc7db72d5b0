//! HTTP inbound adapter exposing REST endpoints.

pub mod communities;
pub mod error;
pub mod health;
pub mod leaderboard;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api/v1` endpoint on a service config.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use community_backend::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(users::list_users)
        .service(users::get_user)
        .service(users::join_community)
        .service(users::leave_community)
        .service(communities::list_communities)
        .service(leaderboard::get_leaderboard);
}
