//! Pure payload validation.
//!
//! Every rule runs regardless of earlier failures, and violations accumulate
//! in field order (name, price, category, description) so callers can hand
//! the whole list back in one response. An empty list means the payload is
//! valid; nothing here mutates its input.

use crate::model::{Category, ProductDraft, ProductPatch};
use rust_decimal::Decimal;

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;

const NAME_REQUIRED: &str = "Name is required.";
const NAME_LENGTH: &str = "Name must be between 3 and 100 characters.";
const PRICE_POSITIVE: &str = "Price must be greater than 0.";
const CATEGORY_INVALID: &str = "Invalid category value.";
const DESCRIPTION_LENGTH: &str = "Description must not exceed 500 characters.";

/// Validate a full create/update payload. Create and update share the same
/// rules: name required and 3..=100 chars, price strictly positive, category
/// a defined label, description at most 500 chars when non-blank.
pub fn validate_draft(draft: &ProductDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    } else if !name_length_ok(&draft.name) {
        errors.push(NAME_LENGTH.to_string());
    }

    if draft.price <= Decimal::ZERO {
        errors.push(PRICE_POSITIVE.to_string());
    }

    if Category::parse(&draft.category).is_none() {
        errors.push(CATEGORY_INVALID.to_string());
    }

    if !draft.description.trim().is_empty() && !description_length_ok(&draft.description) {
        errors.push(DESCRIPTION_LENGTH.to_string());
    }

    errors
}

/// Validate a sparse patch payload. Only fields that are present are
/// checked; a present blank name is caught by the length rule alone.
pub fn validate_patch(patch: &ProductPatch) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(name) = &patch.name {
        if !name_length_ok(name) {
            errors.push(NAME_LENGTH.to_string());
        }
    }

    if let Some(price) = patch.price {
        if price <= Decimal::ZERO {
            errors.push(PRICE_POSITIVE.to_string());
        }
    }

    if let Some(category) = &patch.category {
        if Category::parse(category).is_none() {
            errors.push(CATEGORY_INVALID.to_string());
        }
    }

    if let Some(description) = &patch.description {
        if !description_length_ok(description) {
            errors.push(DESCRIPTION_LENGTH.to_string());
        }
    }

    errors
}

// Lengths are counted in Unicode scalar values, not bytes.
fn name_length_ok(name: &str) -> bool {
    let len = name.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len)
}

fn description_length_ok(description: &str) -> bool {
    description.chars().count() <= DESCRIPTION_MAX_CHARS
}
