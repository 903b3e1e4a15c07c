//! Domain primitives, ports and services.
//!
//! Purpose: define the user entity and its lifecycle independently of HTTP
//! and SQL. Adapters in `inbound` and `outbound` translate to and from these
//! types.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failures.
//! - User, UserId, Username, NewUser, UserChanges — the user aggregate.
//! - Slug — username-derived URL-safe identifier.
//! - TraceId — request-scoped correlation identifier.
//! - UserService — implementation of the user driving ports.

pub mod error;
pub mod ports;
pub mod slug;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::slug::Slug;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserChanges, UserId, Username};
pub use self::user_service::{USER_NOT_FOUND, USER_WAS_NOT_FOUND, UserService};
