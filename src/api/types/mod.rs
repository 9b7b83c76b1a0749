//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod query;

pub use error::{ApiError, ApiErrorKind, ApiErrorResponse};
pub use query::Query;
