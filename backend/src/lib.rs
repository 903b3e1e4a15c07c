//! Taskmanager users service library.
//!
//! Hexagonal layout: [`domain`] holds the user model, ports and service;
//! [`inbound`] adapts HTTP requests onto the driving ports; [`outbound`]
//! implements the repository port over SQLite.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
