//! ripen - Review lifecycle tag updater
//!
//! A command-line tool that walks a directory of markdown documents and
//! advances the review lifecycle tag (draft, last call, accepted, final)
//! recorded in each document's front matter based on its age.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RipenError;
