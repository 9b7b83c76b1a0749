//! Query-string extractor that returns errors in the API envelope

use axum::{
    extract::{FromRequestParts, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Query` whose rejection is an [`ApiError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Query<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => Err(ApiError::invalid_request(format!(
                "Invalid query parameters: {}",
                rejection.body_text()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use serde::Deserialize;

    use crate::api::types::ApiErrorKind;

    #[derive(Debug, Deserialize)]
    struct Params {
        api_key: String,
    }

    async fn extract(uri: &str) -> Result<Query<Params>, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        Query::<Params>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_params() {
        let query = extract("/auth/verify?api_key=abc%20123").await.unwrap();
        assert_eq!(query.api_key, "abc 123");
        assert_eq!(query.into_inner().api_key, "abc 123");
    }

    #[tokio::test]
    async fn test_missing_param_is_invalid_request() {
        let err = extract("/auth/verify").await.unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.kind, ApiErrorKind::InvalidRequest);
        assert!(err.message().contains("api_key"));
    }
}
