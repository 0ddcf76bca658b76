//! Domain layer - Business logic and domain models

pub mod date;
pub mod lifecycle;

pub use date::parse_creation_date;
pub use lifecycle::{advance_tags, LifecycleStage, TagUpdate};
