//! Content module - post sources, parsing, rendering and the catalog

pub mod catalog;
pub mod excerpt;
mod markdown;
pub mod parser;
mod post;
pub mod source;

pub use catalog::PostCatalog;
pub use markdown::MarkdownRenderer;
pub use parser::{ParseOutcome, PostParser, SkipReason};
pub use post::Post;
pub use source::{DirSource, EmbeddedSource, MemorySource, PostSource};
