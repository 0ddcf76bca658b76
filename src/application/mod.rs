//! Application layer - Use cases and orchestration

pub mod advance;

pub use advance::{advance_documents, AdvanceOptions, AdvanceReport};
