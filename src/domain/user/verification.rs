//! API key verification result

use serde::{Deserialize, Serialize};

use super::entity::User;

/// Outcome of checking a presented API key against the user store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyVerification {
    pub is_valid: bool,
    pub user_id: Option<String>,
    pub role: Option<String>,
}

impl ApiKeyVerification {
    /// A key that matched a stored user
    pub fn valid(user: &User) -> Self {
        Self {
            is_valid: true,
            user_id: Some(user.id().as_str().to_string()),
            role: Some(user.role().to_string()),
        }
    }

    /// A key with no matching user
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            user_id: None,
            role: None,
        }
    }
}

impl From<Option<User>> for ApiKeyVerification {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::valid(&user),
            None => Self::invalid(),
        }
    }
}
