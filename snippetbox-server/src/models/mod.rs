//! Domain models
//!
//! Value types shared by the repository and the HTTP layer.

mod snippet;
mod validation;

pub use snippet::{Snippet, SnippetId};
pub use validation::ValidationError;
