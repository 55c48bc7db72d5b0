//! Port abstraction for community persistence adapters.

use async_trait::async_trait;

use crate::domain::{Community, Error};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by community repository adapters.
    pub enum CommunityPersistenceError {
        /// Repository connection could not be established.
        Connection => "community repository connection failed",
        /// Query failed during execution.
        Query => "community repository query failed",
    }
}

impl From<CommunityPersistenceError> for Error {
    fn from(value: CommunityPersistenceError) -> Self {
        match value {
            CommunityPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("community repository unavailable: {message}"))
            }
            CommunityPersistenceError::Query { message } => {
                Self::internal(format!("community repository error: {message}"))
            }
        }
    }
}

/// Driven port for community storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Return every community in storage order.
    ///
    /// The order is significant: the leaderboard breaks ties by it.
    async fn list_communities(&self) -> Result<Vec<Community>, CommunityPersistenceError>;
}
