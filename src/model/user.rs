use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a registered user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
/// - Custom actions ([`UserAction`])
///
/// The avatar never appears in JSON; it is served by its own endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_name: String,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip)]
    pub avatar: Option<Vec<u8>>,
    pub last_updated: DateTime<Utc>,
}

/// Payload for creating a new user.
///
/// Missing keys deserialize to empty strings and are rejected by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCreate {
    pub user_name: String,
    pub first_name: String,
    pub surname: String,
    pub email: String,
}

impl UserCreate {
    pub fn new(
        user_name: impl Into<String>,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            first_name: first_name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}

/// Payload for updating an existing user. Blank or absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

/// Custom actions for User entities.
#[derive(Clone)]
pub enum UserAction {
    /// Replace the stored avatar bytes. Does not touch `last_updated`.
    ReplaceAvatar(Vec<u8>),
}

// Avatar payloads are logged by size only.
impl fmt::Debug for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::ReplaceAvatar(bytes) => {
                write!(f, "ReplaceAvatar({} bytes)", bytes.len())
            }
        }
    }
}

/// The JSON envelope returned when listing users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub count: usize,
}

impl UserList {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            count: users.len(),
            users,
        }
    }
}
