//! Snippet entity and identifier

use std::fmt;

use chrono::{DateTime, Utc};

use super::ValidationError;

/// Storage-assigned snippet identifier, always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnippetId(i32);

impl SnippetId {
    /// Parse an identifier from untrusted input such as a query string.
    ///
    /// # Example
    /// ```
    /// use snippetbox_server::models::SnippetId;
    ///
    /// assert_eq!(SnippetId::parse("42").unwrap().get(), 42);
    /// assert!(SnippetId::parse("0").is_err());
    /// assert!(SnippetId::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        let value: i32 = s.parse().map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "not an integer",
        })?;

        Self::new(value)
    }

    /// Wrap a numeric identifier, rejecting zero and negatives.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::NotPositive {
                field: "id",
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Identifier read back from the `SERIAL` primary key.
    pub(crate) fn from_storage(value: i32) -> Self {
        Self(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled piece of text with a creation and an expiry time.
///
/// Snippets are immutable once read from storage; only the repository's row
/// mapping builds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    id: SnippetId,
    title: String,
    content: String,
    created: DateTime<Utc>,
    expires: DateTime<Utc>,
}

impl Snippet {
    pub(crate) fn from_parts(
        id: SnippetId,
        title: String,
        content: String,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created,
            expires,
        }
    }

    pub fn id(&self) -> SnippetId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn expires(&self) -> DateTime<Utc> {
        self.expires
    }

    /// A snippet is live while `now` is strictly before its expiry.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }
}

/// Plain-text dump of every field, used as the view response body.
impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id:{} title:{} content:{} created:{} expires:{}}}",
            self.id,
            self.title,
            self.content,
            self.created.to_rfc3339(),
            self.expires.to_rfc3339()
        )
    }
}
