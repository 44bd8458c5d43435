//! kaigo-prompt
//!
//! Prompt construction for the two model flows: care-plan generation and
//! assessment extraction. Both builders are pure functions composing the
//! shared formatting helpers in [`format`].

pub mod care_plan;
pub mod extraction;
pub mod format;

pub use care_plan::{DEFAULT_INSTRUCTION, build_care_plan_prompt, build_care_plan_prompt_with_examples};
pub use extraction::{SourceMode, build_extraction_prompt};
