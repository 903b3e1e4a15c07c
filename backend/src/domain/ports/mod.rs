//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories) expose strongly typed errors so adapters map
//! their failures into predictable variants. Driving ports (use-cases) speak
//! the domain [`Error`](crate::domain::Error) consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
