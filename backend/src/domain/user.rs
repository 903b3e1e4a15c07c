//! User data model.
//!
//! A [`User`] is created from a [`NewUser`] draft; the store assigns its
//! [`UserId`] and the [`Slug`] is derived from the username once, at
//! creation. Later edits go through [`UserChanges`], which can only touch the
//! name and age fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Slug;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login handle supplied at creation.
///
/// Any string is accepted, including an empty one; its slug may then be
/// empty too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Wrap a username.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Slug derived from this username.
    pub fn slug(&self) -> Slug {
        Slug::derive(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Stored user record.
///
/// Serialises to the wire shape `{id, username, firstname, lastname, age,
/// slug}`.
///
/// # Examples
/// ```
/// use backend::domain::{NewUser, User, UserId, Username};
///
/// let draft = NewUser::new(Username::new("Jane Doe"), "Jane", "Doe", 30);
/// let user = User::from_draft(UserId::new(1), draft);
/// assert_eq!(user.slug().as_ref(), "jane-doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    firstname: String,
    lastname: String,
    age: i64,
    slug: Slug,
}

impl User {
    /// Assemble a user from stored columns.
    pub fn from_parts(
        id: UserId,
        username: Username,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        age: i64,
        slug: Slug,
    ) -> Self {
        Self {
            id,
            username,
            firstname: firstname.into(),
            lastname: lastname.into(),
            age,
            slug,
        }
    }

    /// Materialise a draft once the store has assigned an identifier.
    pub fn from_draft(id: UserId, draft: NewUser) -> Self {
        let NewUser {
            username,
            firstname,
            lastname,
            age,
            slug,
        } = draft;
        Self {
            id,
            username,
            firstname,
            lastname,
            age,
            slug,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Username supplied at creation.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Given name.
    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    /// Family name.
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Slug derived from the username at creation.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Apply a partial update, leaving identity fields untouched.
    #[must_use]
    pub fn with_changes(mut self, changes: &UserChanges) -> Self {
        if let Some(firstname) = &changes.firstname {
            self.firstname.clone_from(firstname);
        }
        if let Some(lastname) = &changes.lastname {
            self.lastname.clone_from(lastname);
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
        self
    }
}

/// Draft for a user that has not been stored yet.
///
/// The slug is fixed when the draft is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    firstname: String,
    lastname: String,
    age: i64,
    slug: Slug,
}

impl NewUser {
    /// Build a draft, deriving its slug from `username`.
    pub fn new(
        username: Username,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        age: i64,
    ) -> Self {
        let slug = username.slug();
        Self {
            username,
            firstname: firstname.into(),
            lastname: lastname.into(),
            age,
            slug,
        }
    }

    /// Username to store.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Given name to store.
    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    /// Family name to store.
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Age to store.
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Slug derived from the username.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }
}

/// Partial update for a stored user. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement given name.
    pub firstname: Option<String>,
    /// Replacement family name.
    pub lastname: Option<String>,
    /// Replacement age.
    pub age: Option<i64>,
}

impl UserChanges {
    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests;
