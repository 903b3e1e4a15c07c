//! User resource handlers mounted under `/user`.
//!
//! ```text
//! GET    /user/
//! GET    /user/user_id?user_id=1
//! POST   /user/create                {"username":"Jane Doe","firstname":"Jane","lastname":"Doe","age":30}
//! PUT    /user/update?user_id=1      {"firstname":"Janet"}
//! DELETE /user/delete?user_id=1
//! ```

use actix_web::{Scope, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NewUser, User, UserChanges, UserId, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorDetail, json_error_handler, query_error_handler};
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Acknowledgement text for create and update.
///
/// Create reuses the update wording.
pub const UPDATE_ACKNOWLEDGEMENT: &str = "User update is successful!";
/// Acknowledgement text for delete.
pub const DELETE_ACKNOWLEDGEMENT: &str = "User delete is successful!";

/// Query string selecting one user.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// Identifier of the target user.
    pub user_id: i64,
}

impl From<UserIdQuery> for UserId {
    fn from(value: UserIdQuery) -> Self {
        UserId::new(value.user_id)
    }
}

/// Request body for `POST /user/create`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Login handle; the slug is derived from it.
    #[schema(example = "Jane Doe")]
    pub username: String,
    /// Given name.
    #[schema(example = "Jane")]
    pub firstname: String,
    /// Family name.
    #[schema(example = "Doe")]
    pub lastname: String,
    /// Age in years.
    #[schema(example = 30)]
    pub age: i64,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            firstname,
            lastname,
            age,
        } = value;
        NewUser::new(Username::new(username), firstname, lastname, age)
    }
}

/// Request body for `PUT /user/update`. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Janet")]
    pub firstname: Option<String>,
    /// New family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// New age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            firstname: value.firstname,
            lastname: value.lastname,
            age: value.age,
        }
    }
}

/// Acknowledgement returned by the mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct TransactionResponse {
    /// Always `200`.
    #[schema(example = 200)]
    pub status_code: u16,
    /// Acknowledgement text.
    #[schema(example = "User update is successful!")]
    pub transaction: String,
}

impl TransactionResponse {
    fn ok(transaction: &str) -> Self {
        Self {
            status_code: 200,
            transaction: transaction.to_owned(),
        }
    }
}

/// List every stored user in insertion order.
#[utoipa::path(
    get,
    path = "/user/",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 503, description = "Database unavailable", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tags = ["user"],
    operation_id = "allUsers"
)]
#[get("/")]
pub async fn all_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/user/user_id",
    params(UserIdQuery),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 404, description = "User was not found", body = ErrorDetail),
        (status = 422, description = "Invalid user_id", body = ErrorDetail)
    ),
    tags = ["user"],
    operation_id = "userById"
)]
#[get("/user_id")]
pub async fn user_by_id(
    state: web::Data<HttpState>,
    query: web::Query<UserIdQuery>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.get_user(query.into_inner().into()).await?;
    Ok(web::Json(user))
}

/// Create a user; the slug is derived from the username.
#[utoipa::path(
    post,
    path = "/user/create",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = TransactionResponse),
        (status = 422, description = "Invalid request body", body = ErrorDetail)
    ),
    tags = ["user"],
    operation_id = "createUser"
)]
#[post("/create")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<TransactionResponse>> {
    state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(web::Json(TransactionResponse::ok(UPDATE_ACKNOWLEDGEMENT)))
}

/// Update the name and age fields of a user.
#[utoipa::path(
    put,
    path = "/user/update",
    params(UserIdQuery),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = TransactionResponse),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 422, description = "Invalid request", body = ErrorDetail)
    ),
    tags = ["user"],
    operation_id = "updateUser"
)]
#[put("/update")]
pub async fn update_user(
    state: web::Data<HttpState>,
    query: web::Query<UserIdQuery>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<TransactionResponse>> {
    state
        .users_command
        .update_user(query.into_inner().into(), payload.into_inner().into())
        .await?;
    Ok(web::Json(TransactionResponse::ok(UPDATE_ACKNOWLEDGEMENT)))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/user/delete",
    params(UserIdQuery),
    responses(
        (status = 200, description = "User deleted", body = TransactionResponse),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 422, description = "Invalid user_id", body = ErrorDetail)
    ),
    tags = ["user"],
    operation_id = "deleteUser"
)]
#[delete("/delete")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    query: web::Query<UserIdQuery>,
) -> ApiResult<web::Json<TransactionResponse>> {
    state
        .users_command
        .delete_user(query.into_inner().into())
        .await?;
    Ok(web::Json(TransactionResponse::ok(DELETE_ACKNOWLEDGEMENT)))
}

/// The `/user` scope with extractor errors mapped to `422 {"detail": ...}`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::scope;
///
/// let app = App::new().service(scope());
/// ```
pub fn scope() -> Scope {
    web::scope("/user")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(all_users)
        .service(user_by_id)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
}
