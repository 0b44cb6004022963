//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Every command reports through these helpers so that errors, confirmations
//! and section headings look the same across the storefront and the admin
//! screens.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for confirmations, blue for usage
//! - **Standardized spacing**: Newline before and after all command outputs

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error followed by usage lines
///
/// # Format
/// ```text
///
/// ✕ Error: <message>.
/// Usage:
///   <usage_pattern1>
///   ...
///
/// ```
pub fn print_error_with_usage(message: &str, usage_patterns: &[&str]) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());

    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    println!();
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// A muted `label: value` line used in detail views and totals.
pub fn print_field(label: &str, value: &str) {
    println!("   {} {}", format!("{label}:").bright_black(), value);
}
