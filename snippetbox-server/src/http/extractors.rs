//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::SnippetId;

/// Extract and validate the `id` query parameter.
///
/// Every rejection is a plain 404 so a malformed id can't be told apart from
/// a snippet that doesn't exist. When `id` repeats, the first value wins.
pub struct ValidSnippetId(pub SnippetId);

impl<S> FromRequestParts<S> for ValidSnippetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|_| ApiError::not_found())?;

        let raw = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value))
            .unwrap_or_default();
        SnippetId::parse(&raw).map(Self).map_err(|err| {
            tracing::debug!(id = %raw, %err, "rejected snippet id");
            ApiError::not_found()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<ValidSnippetId, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidSnippetId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn accepts_positive_id() {
        let ValidSnippetId(id) = extract("/snippet/view?id=12").await.ok().unwrap();
        assert_eq!(id.get(), 12);
    }

    #[tokio::test]
    async fn first_id_wins() {
        let ValidSnippetId(id) = extract("/snippet/view?id=1&id=2").await.ok().unwrap();
        assert_eq!(id.get(), 1);

        let ValidSnippetId(id) = extract("/snippet/view?x=y&id=5&id=abc").await.ok().unwrap();
        assert_eq!(id.get(), 5);
    }

    #[tokio::test]
    async fn rejects_everything_else_as_not_found() {
        for uri in [
            "/snippet/view",
            "/snippet/view?id=",
            "/snippet/view?id=0",
            "/snippet/view?id=-5",
            "/snippet/view?id=abc",
            "/snippet/view?id=abc&id=1",
        ] {
            let err = extract(uri).await.err().unwrap();
            assert!(matches!(err, ApiError::NotFound), "{uri}");
        }
    }
}
