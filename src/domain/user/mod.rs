//! User domain
//!
//! Users are the credential records API keys are verified against.

mod entity;
mod repository;
mod verification;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use verification::ApiKeyVerification;

#[cfg(test)]
pub use repository::MockUserRepository;
