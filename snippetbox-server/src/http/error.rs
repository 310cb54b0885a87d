//! Centralized error-to-response translation
//!
//! Clients only ever see a status code and its canonical reason phrase.
//! Server faults are logged with the failing call site and a backtrace.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::panic::Location;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

type BoxedError = Box<dyn StdError + Send + Sync>;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No live resource, or input that can't name one (404)
    NotFound,

    /// Caller protocol violation, e.g. wrong method (4xx)
    Client(StatusCode),

    /// Unexpected failure (500, logged)
    Server(ServerFault),
}

/// Diagnostic detail kept server-side for a 500 response.
#[derive(Debug)]
pub struct ServerFault {
    source: BoxedError,
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl ServerFault {
    /// Source location of the code that reported the fault.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn source(&self) -> &(dyn StdError + Send + Sync) {
        self.source.as_ref()
    }

    fn log(&self) {
        tracing::error!(
            location = %self.location,
            error = %self.source,
            "{}\n{}",
            self.source,
            self.backtrace
        );
    }
}

impl ApiError {
    /// Wrap `err` as a 500, attributed to the caller's source location.
    #[track_caller]
    pub fn server_fault(err: impl Into<BoxedError>) -> Self {
        Self::Server(ServerFault {
            source: err.into(),
            location: Location::caller(),
            backtrace: Backtrace::force_capture(),
        })
    }

    pub fn client_fault(status: StatusCode) -> Self {
        Self::Client(status)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Client(status) => *status,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Server(fault) = &self {
            fault.log();
        }
        status_text_response(self.status())
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound => Self::NotFound,
            other => Self::server_fault(other),
        }
    }
}

/// Plain-text response whose body is the status's reason phrase.
pub fn status_text_response(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        ],
        format!("{reason}\n"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "Not Found\n");
    }

    #[tokio::test]
    async fn client_fault_uses_reason_phrase() {
        let response = ApiError::client_fault(StatusCode::BAD_REQUEST).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Bad Request\n");
    }

    #[tokio::test]
    async fn server_fault_hides_detail_and_logs_it() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let err = DbError::Sqlx(sqlx::Error::Protocol("relation snippets vanished".into()));
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert_eq!(body, "Internal Server Error\n");
        assert!(!body.contains("snippets vanished"));

        let logged = logs.contents();
        assert!(logged.contains("ERROR"));
        assert!(logged.contains("relation snippets vanished"));
        assert!(logged.contains("error.rs"));
    }

    #[test]
    fn db_not_found_maps_to_not_found() {
        let err = ApiError::from(DbError::NotFound);
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    fn fails_with_question_mark() -> Result<(), ApiError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))?;
        Ok(())
    }

    #[test]
    fn fault_is_attributed_to_the_caller() {
        let expected_line = line!() + 1;
        let err = ApiError::server_fault(std::io::Error::other("disk on fire"));
        let ApiError::Server(fault) = err else {
            panic!("expected a server fault");
        };
        assert!(fault.location().file().ends_with("error.rs"));
        assert_eq!(fault.location().line(), expected_line);
        assert_eq!(fault.source().to_string(), "disk on fire");

        let Err(ApiError::Server(fault)) = fails_with_question_mark() else {
            panic!("expected a server fault");
        };
        assert!(fault.location().file().ends_with("error.rs"));
        assert_ne!(fault.location().line(), expected_line);
    }
}
