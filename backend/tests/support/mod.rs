//! Shared helpers for behaviour tests.
//!
//! Scenarios name users and communities by short aliases; these helpers map
//! each alias onto a fixed UUID so steps can refer to the same record.

use std::sync::Arc;

use community_backend::domain::{Community, CommunityId, UserId};
use tokio::runtime::Runtime;

/// Cloneable handle to the scenario runtime.
#[derive(Clone)]
pub struct RuntimeHandle(pub Arc<Runtime>);

impl RuntimeHandle {
    pub fn new() -> Self {
        Self(Arc::new(Runtime::new().expect("create runtime")))
    }
}

fn alias_index(alias: &str) -> u128 {
    match alias {
        "ada" | "alpha" => 1,
        "bob" | "beta" => 2,
        "cy" | "gamma" => 3,
        other => panic!("unknown alias: {other}"),
    }
}

pub fn user_id(alias: &str) -> UserId {
    UserId::new(uuid::Uuid::from_u128(0xa000 + alias_index(alias)).to_string()).expect("user id")
}

pub fn community_id(alias: &str) -> CommunityId {
    CommunityId::new(uuid::Uuid::from_u128(0xc000 + alias_index(alias)).to_string())
        .expect("community id")
}

pub fn community(alias: &str) -> Community {
    Community::try_new(community_id(alias), alias).expect("community")
}

/// Split a comma separated step argument.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
