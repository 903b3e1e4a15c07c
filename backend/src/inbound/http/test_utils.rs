//! Test helpers for inbound HTTP components.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use crate::Trace;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId, UserService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;

#[derive(Default)]
struct StubState {
    rows: BTreeMap<i64, User>,
    last_id: i64,
    failure: Option<UserPersistenceError>,
}

/// In-memory `UserRepository` that mimics the SQLite table: identifiers
/// increase monotonically and are never reused.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<StubState>,
}

impl InMemoryUserRepository {
    /// Make every following call fail with `failure`.
    pub fn fail_with(&self, failure: UserPersistenceError) {
        self.state.lock().expect("state lock").failure = Some(failure);
    }

    /// Snapshot of the stored rows in identifier order.
    pub fn rows(&self) -> Vec<User> {
        self.state
            .lock()
            .expect("state lock")
            .rows
            .values()
            .cloned()
            .collect()
    }

    fn check(state: &StubState) -> Result<(), UserPersistenceError> {
        state.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Self::check(&state)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Self::check(&state)?;
        Ok(state.rows.get(&id.get()).cloned())
    }

    async fn insert(&self, draft: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        Self::check(&state)?;
        state.last_id += 1;
        let id = state.last_id;
        let user = User::from_draft(UserId::new(id), draft.clone());
        state.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        Self::check(&state)?;
        let Some(current) = state.rows.remove(&id.get()) else {
            return Ok(None);
        };
        let updated = current.with_changes(changes);
        state.rows.insert(id.get(), updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        Self::check(&state)?;
        Ok(state.rows.remove(&id.get()).is_some())
    }
}

/// Wire `repo` through the real `UserService` into handler state.
pub fn state_over(repo: Arc<InMemoryUserRepository>) -> HttpState {
    HttpState::from_service(Arc::new(UserService::new(repo)))
}

/// App with the trace middleware and the `/user` scope over `state`.
pub fn users_app(
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
        .service(users::scope())
}
