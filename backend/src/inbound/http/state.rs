//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Construct state from one service implementing both user ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::UserService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn build() -> Result<HttpState, backend::outbound::persistence::PoolError> {
    /// let pool = DbPool::new(PoolConfig::new("taskmanager.db")).await?;
    /// let service = UserService::new(Arc::new(DieselUserRepository::new(pool)));
    /// Ok(HttpState::from_service(Arc::new(service)))
    /// # }
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        let users: Arc<dyn UsersQuery> = service.clone();
        let users_command: Arc<dyn UsersCommand> = service;
        Self::new(users, users_command)
    }
}
