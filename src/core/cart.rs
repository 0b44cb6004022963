//! The shopping cart aggregate.
//!
//! A [`Cart`] holds at most one [`CartLine`] per product id, in insertion order.
//! Totals are never stored; [`Cart::total_items`] and [`Cart::total_price`] are
//! recomputed from the lines on every call. None of the operations here can fail:
//! unknown product ids are no-ops.
//!
//! There is no upper bound on quantities and no stock check.

use crate::core::catalog::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    is_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from already validated lines; zero quantities and repeated
    /// product ids are folded so the one-line-per-product rule still holds.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines.into_iter().filter(|l| l.quantity > 0) {
            match cart.position(&line.product.id) {
                Some(idx) => {
                    let existing = &mut cart.lines[idx];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }

    /// Increment the product's line, or append a new line with quantity 1.
    ///
    /// Does not open the drawer.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.position(&product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Set the quantity exactly; zero or below removes the line.
    pub fn update_quantity(&mut self, product_id: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(idx) = self.position(product_id) {
            self.lines[idx].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn increment(&mut self, product_id: &str) {
        if let Some(idx) = self.position(product_id) {
            let line = &mut self.lines[idx];
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Lower the quantity by one, stopping at 1. Never removes the line.
    pub fn decrement(&mut self, product_id: &str) {
        if let Some(idx) = self.position(product_id) {
            let line = &mut self.lines[idx];
            line.quantity = line.quantity.saturating_sub(1).max(1);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn set_is_cart_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_price(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.subtotal()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{catalog, find_product};

    fn product(id: &str) -> &'static Product {
        find_product(id).expect("catalog product")
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = Cart::new();
        let p = product("sg-003");
        cart.add_to_cart(p);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), p.price);
        assert!(!cart.is_open());
    }

    #[test]
    fn test_add_existing_increments_single_line() {
        let mut cart = Cart::new();
        let p = product("sg-001");
        cart.add_to_cart(p);
        cart.add_to_cart(p);
        cart.add_to_cart(p);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("sg-001").map(|l| l.quantity), Some(3));
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-005"));
        cart.add_to_cart(product("sg-002"));
        cart.add_to_cart(product("sg-005"));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["sg-005", "sg-002"]);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-001"));
        cart.add_to_cart(product("sg-002"));
        cart.update_quantity("sg-001", 0);
        assert!(cart.line("sg-001").is_none());
        assert_eq!(cart.lines().len(), 1);

        cart.update_quantity("sg-002", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-008"));
        cart.update_quantity("sg-008", 5);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), 5 * 22000);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-001"));
        let before = cart.clone();
        cart.remove_from_cart("sg-999");
        cart.update_quantity("sg-999", 4);
        cart.increment("sg-999");
        cart.decrement("sg-999");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_last_line_empties_totals() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-004"));
        cart.remove_from_cart("sg-004");
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-006"));
        cart.increment("sg-006");
        cart.decrement("sg-006");
        cart.decrement("sg-006");
        cart.decrement("sg-006");
        assert_eq!(cart.line("sg-006").map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_drawer_flag_is_independent() {
        let mut cart = Cart::new();
        cart.set_is_cart_open(true);
        assert!(cart.is_open());
        cart.add_to_cart(product("sg-001"));
        assert!(cart.is_open());
        cart.set_is_cart_open(false);
        assert!(!cart.is_open());
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_total_price_sums_every_line() {
        let mut cart = Cart::new();
        for p in catalog() {
            cart.add_to_cart(p);
        }
        cart.update_quantity("sg-002", 3);
        let expected: u64 = catalog().iter().map(|p| p.price).sum::<u64>() + 2 * 38000;
        assert_eq!(cart.total_price(), expected);
        assert_eq!(cart.total_items(), 10);
    }

    #[test]
    fn test_from_lines_folds_duplicates_and_zeroes() {
        let line = |id: &str, quantity| CartLine {
            product: product(id).clone(),
            quantity,
        };
        let cart = Cart::from_lines(vec![line("sg-001", 2), line("sg-002", 0), line("sg-001", 1)]);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_to_cart(product("sg-001"));
        cart.add_to_cart(product("sg-002"));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
    }
}
