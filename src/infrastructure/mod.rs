//! Infrastructure layer - External I/O and persistence

pub mod frontmatter;
pub mod repository;

pub use frontmatter::{parse_document, Document, Metadata};
pub use repository::DocumentRepository;
