//! kaigo-corpus
//!
//! The static care-plan exemplar corpus and the pure functions over it:
//! keyword-based category detection and bounded exemplar selection.
//! Pure data and pure functions — no network dependency.

pub mod corpus;
pub mod detect;
pub mod select;

pub use corpus::{all_categories, get_category};
pub use detect::detect_categories;
pub use select::{MAX_EXAMPLES_PER_CATEGORY, MAX_TOTAL_EXAMPLES, select_examples};
