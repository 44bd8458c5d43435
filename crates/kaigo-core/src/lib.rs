//! kaigo-core
//!
//! Pure domain types and the shared error vocabulary of the kaigo system.
//! No network dependency — this is the common vocabulary consumed by the
//! corpus, prompt, and invocation crates.

pub mod error;
pub mod fields;
pub mod models;
