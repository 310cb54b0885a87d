//! Database layer - schema bootstrap and the snippet repository
//!
//! # Design Principles
//!
//! - One shared `PgPool`, sized explicitly at startup
//! - Query plans are prepared once and held for the process lifetime
//! - "No live row" is a typed `DbError::NotFound`, never a string match

pub mod repos;
pub mod schema;
pub mod store;

pub use repos::SnippetRepo;
pub use schema::ensure_schema;
pub use sqlx::postgres::PgPoolOptions;
pub use sqlx::PgPool;
pub use store::{DbError, SnippetStore};
