//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating silk-storefront command output and
//! error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the standard error prefix
pub fn is_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕ Error:").and(predicates::str::contains(message.to_string()))
}

/// Creates a predicate that checks for a numbered listing entry
pub fn has_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for a numbered product line
pub fn has_product_line(index: u32, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}] {}", index, name))
}

/// Creates a predicate that checks the bag subtotal
pub fn has_subtotal(amount: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Subtotal: {}", amount))
}

/// Creates a predicate that checks the bag item count
pub fn has_item_count(count: u64) -> impl Predicate<str> {
    let noun = if count == 1 { "item" } else { "items" };
    predicates::str::contains(format!("Items: {} {}", count, noun))
}
