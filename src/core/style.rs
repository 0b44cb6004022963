//! Colors and line formats shared by every listing.
//!
//! Status colors follow the account and admin screens: new orders blue,
//! processing yellow, shipped purple, delivered green. Product lines carry the
//! listing number used by `add`, `show` and friends.
//!
//! # Public API
//! - [`order_status_style`] / [`payment_status_style`]: Color function for a status
//! - [`colored_order_status`]: Status text padded for column alignment
//! - [`format_product_line`]: A numbered catalog line with price and badges
//! - [`format_price_tag`]: Selling price, struck original price and discount
//! - [`strip_ansi_codes`]: Remove color codes, mainly for tests

use crate::core::catalog::{format_price, Product};
use crate::core::orders::{OrderStatus, PaymentStatus};
use colored::*;

pub fn order_status_style(status: OrderStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        OrderStatus::New => Box::new(|text: &str| text.blue()),
        OrderStatus::Processing => Box::new(|text: &str| text.yellow()),
        OrderStatus::Shipped => Box::new(|text: &str| text.magenta()),
        OrderStatus::Delivered => Box::new(|text: &str| text.green()),
    }
}

pub fn payment_status_style(status: PaymentStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        PaymentStatus::Paid => Box::new(|text: &str| text.green()),
        PaymentStatus::Pending => Box::new(|text: &str| text.yellow()),
        PaymentStatus::Failed => Box::new(|text: &str| text.red().bold()),
    }
}

/// Status label padded to the widest label so columns line up.
pub fn colored_order_status(status: OrderStatus) -> ColoredString {
    let color_fn = order_status_style(status);
    color_fn(&format!("{:<10}", status.label()))
}

pub fn colored_payment_status(status: PaymentStatus) -> ColoredString {
    let color_fn = payment_status_style(status);
    color_fn(status.as_str())
}

/// `₹45,000 ₹52,000 (13% off)`; the original price only shows with a real discount.
pub fn format_price_tag(product: &Product) -> String {
    let price = format_price(product.price).white().bold();
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => format!(
            "{} {} {}",
            price,
            format_price(original).bright_black().strikethrough(),
            format!("({percent}% off)").green()
        ),
        _ => price.to_string(),
    }
}

pub fn format_badges(product: &Product) -> String {
    let mut badges = Vec::new();
    if product.is_new {
        badges.push("NEW".cyan().bold().to_string());
    }
    if product.is_best_seller {
        badges.push("BESTSELLER".yellow().bold().to_string());
    }
    badges.join(" ")
}

pub fn format_product_line(index: usize, product: &Product) -> String {
    let index_colored = format!("[{index}]").cyan().bold();
    let badges = format_badges(product);
    let line = format!(
        "{} {}  {}",
        index_colored,
        product.name.white(),
        format_price_tag(product)
    );
    if badges.is_empty() {
        line
    } else {
        format!("{line}  {badges}")
    }
}

pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::find_product;

    fn plain(s: impl ToString) -> String {
        strip_ansi_codes(&s.to_string())
    }

    #[test]
    fn test_strip_ansi_codes() {
        assert_eq!(strip_ansi_codes("\x1b[1;36m[1]\x1b[0m Silk"), "[1] Silk");
        assert_eq!(strip_ansi_codes("no codes"), "no codes");
    }

    #[test]
    fn test_product_line_with_discount_and_badge() {
        let product = find_product("sg-001").expect("seed product");
        let line = plain(format_product_line(1, product));
        assert!(line.starts_with("[1] Royal Burgundy Bridal Silk"));
        assert!(line.contains("₹45,000 ₹52,000 (13% off)"));
        assert!(line.contains("NEW"));
    }

    #[test]
    fn test_product_line_without_discount() {
        let product = find_product("sg-002").expect("seed product");
        let line = plain(format_product_line(7, product));
        assert!(line.contains("[7] Emerald Temple Silk  ₹38,000"));
        assert!(!line.contains("off"));
        assert!(line.contains("BESTSELLER"));
    }

    #[test]
    fn test_order_status_alignment() {
        for status in OrderStatus::ALL {
            assert_eq!(plain(colored_order_status(status)).len(), 10);
        }
        assert_eq!(plain(colored_payment_status(PaymentStatus::Failed)), "failed");
    }
}
