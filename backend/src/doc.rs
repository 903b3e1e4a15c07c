//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user endpoints, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document backs Swagger
//! UI in debug builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorDetail;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::users::{CreateUserRequest, TransactionResponse, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskmanager users API",
        description = "CRUD operations over stored users, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::all_users,
        crate::inbound::http::users::user_by_id,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorDetail,
        CreateUserRequest,
        UpdateUserRequest,
        TransactionResponse
    )),
    tags(
        (name = "user", description = "Operations on stored users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
