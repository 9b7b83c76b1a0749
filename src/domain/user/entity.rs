//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier as stored in the user table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user record holding the API key it authenticates with.
///
/// Records are owned by the user store and never mutated by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    /// Never exposed in serialization
    #[serde(skip_serializing)]
    api_key: String,
    role: String,
}

impl User {
    pub fn new(id: UserId, api_key: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            api_key: api_key.into(),
            role: role.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}
