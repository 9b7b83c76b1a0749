//! API middleware components

pub mod logging;
pub mod security;

pub use logging::{logging_middleware, redact_uri};
pub use security::security_headers_middleware;
