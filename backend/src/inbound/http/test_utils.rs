//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::{Community, CommunityId, ExperienceAward, User, UserId};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryCommunityRepository, InMemoryUserRepository};

/// Community listed first; Ada is its only member.
pub const ALPHA_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
/// Community listed second, without members.
pub const BETA_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
/// Member of Alpha with 15 points.
pub const ADA_ID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";
/// Unaffiliated user with 3 points.
pub const BOB_ID: &str = "9b2c1f6e-7a4d-4c1b-8f3e-5d6a7b8c9d0e";

/// Two communities and two users: Ada (5 + 10 points) in Alpha, Bob
/// (3 points) unaffiliated.
pub fn seeded_state() -> HttpState {
    let alpha = Community::try_new(CommunityId::new(ALPHA_ID).expect("id"), "Alpha")
        .expect("community");
    let beta =
        Community::try_new(CommunityId::new(BETA_ID).expect("id"), "Beta").expect("community");
    let ada = User::new(UserId::new(ADA_ID).expect("id"), "ada@example.com")
        .with_experience(vec![ExperienceAward::new(5), ExperienceAward::new(10)])
        .in_community(alpha.id().clone());
    let bob = User::new(UserId::new(BOB_ID).expect("id"), "bob@example.com")
        .with_experience(vec![ExperienceAward::new(3)]);

    HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new(vec![ada, bob])),
        Arc::new(InMemoryCommunityRepository::new(vec![alpha, beta])),
    )
}

/// Build an app serving the `/api/v1` scope over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
}
