//! Bounded exemplar selection from the corpus.

use kaigo_core::models::category::{CarePlanExample, CategoryId};

use crate::corpus::get_category;

/// At most this many examples are taken from any single category.
pub const MAX_EXAMPLES_PER_CATEGORY: usize = 3;

/// The combined selection is truncated to this many examples.
pub const MAX_TOTAL_EXAMPLES: usize = 10;

/// Select exemplars for the detected categories.
///
/// For each category in the given order, appends up to
/// [`MAX_EXAMPLES_PER_CATEGORY`] of its examples in corpus order, then
/// truncates the combined list to [`MAX_TOTAL_EXAMPLES`]. Categories absent
/// from the corpus are silently skipped. There is no cross-category identity
/// dedup — each example belongs to exactly one category by construction, so
/// the simple concatenate-then-truncate is sufficient.
pub fn select_examples(category_ids: &[CategoryId]) -> Vec<&'static CarePlanExample> {
    let mut selected = Vec::new();

    for id in category_ids {
        if let Some(category) = get_category(*id) {
            selected.extend(category.examples.iter().take(MAX_EXAMPLES_PER_CATEGORY));
        }
    }

    selected.truncate(MAX_TOTAL_EXAMPLES);
    selected
}
