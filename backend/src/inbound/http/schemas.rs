//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape so utoipa can document them.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Username supplied at creation.
    #[schema(example = "Jane Doe")]
    username: String,
    /// Given name.
    #[schema(example = "Jane")]
    firstname: String,
    /// Family name.
    #[schema(example = "Doe")]
    lastname: String,
    /// Age in years.
    #[schema(example = 30)]
    age: i64,
    /// URL-safe form of the username, fixed at creation.
    #[schema(example = "jane-doe")]
    slug: String,
}
