//! In-memory stores and log capture for unit tests

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::db::repos::snippets::LATEST_LIMIT;
use crate::db::{DbError, SnippetStore};
use crate::models::{Snippet, SnippetId};

/// Vec-backed store with the same liveness and ordering rules as Postgres.
#[derive(Default)]
pub(crate) struct MemoryStore {
    snippets: Mutex<Vec<Snippet>>,
}

impl MemoryStore {
    /// Seed a row with explicit timestamps, bypassing `insert`.
    pub(crate) fn seed(
        &self,
        title: &str,
        content: &str,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> SnippetId {
        let mut snippets = self.snippets.lock().unwrap();
        let id = SnippetId::from_storage(snippets.len() as i32 + 1);
        snippets.push(Snippet::from_parts(
            id,
            title.to_owned(),
            content.to_owned(),
            created,
            expires,
        ));
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.snippets.lock().unwrap().len()
    }
}

#[async_trait]
impl SnippetStore for MemoryStore {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i32,
    ) -> Result<SnippetId, DbError> {
        let created = Utc::now();
        let expires = created + Duration::days(i64::from(expires_in_days));
        Ok(self.seed(title, content, created, expires))
    }

    async fn get(&self, id: SnippetId) -> Result<Snippet, DbError> {
        let now = Utc::now();
        self.snippets
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id && s.is_live_at(now))
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, DbError> {
        let now = Utc::now();
        let mut live: Vec<Snippet> = self
            .snippets
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_live_at(now))
            .cloned()
            .collect();
        live.sort_by(|a, b| b.id().cmp(&a.id()));
        live.truncate(LATEST_LIMIT);
        Ok(live)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn close(&self) {}
}

/// Store whose every query fails with a protocol error carrying `message`.
pub(crate) struct FailingStore {
    message: &'static str,
    calls: AtomicUsize,
}

impl FailingStore {
    pub(crate) fn new(message: &'static str) -> Self {
        Self {
            message,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DbError::Sqlx(sqlx::Error::Protocol(self.message.to_owned())))
    }
}

#[async_trait]
impl SnippetStore for FailingStore {
    async fn insert(&self, _: &str, _: &str, _: i32) -> Result<SnippetId, DbError> {
        self.fail()
    }

    async fn get(&self, _: SnippetId) -> Result<Snippet, DbError> {
        self.fail()
    }

    async fn latest(&self) -> Result<Vec<Snippet>, DbError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.fail()
    }

    async fn close(&self) {}
}

/// Shared buffer that a thread-local fmt subscriber writes into.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route tracing output on this thread into the buffer until the guard drops.
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
