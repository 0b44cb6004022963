//! Catalog filtering and sorting for the product listing.
//!
//! [`filter_and_sort`] is a pure function: the same catalog and [`FilterState`]
//! always produce the same ordered view, and neither input is modified.
//!
//! Filters are conjunctive (category AND collection). Sorting happens after
//! filtering and is always stable, so catalog order survives among ties.

use crate::core::catalog::{Category, Collection, Product};
use crate::core::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// New arrivals first, catalog order otherwise
    #[default]
    Newest,
    /// Price: low to high
    PriceAsc,
    /// Price: high to low
    PriceDesc,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceAsc => "Price: Low → High",
            SortKey::PriceDesc => "Price: High → Low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "newest" => Ok(SortKey::Newest),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            other => Err(StorefrontError::unknown_sort_key(other)),
        }
    }
}

/// Filter and sort selections for the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<Category>,
    pub collection: Option<Collection>,
    pub sort: SortKey,
}

impl FilterState {
    /// Seed a filter state from URL-style query parameters.
    ///
    /// Accepts `category`, `collection` and `sort`; other keys are ignored and
    /// empty values leave the filter unset. `+` and `%20` decode to spaces.
    pub fn from_query(query: &str) -> Result<Self> {
        let mut state = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = raw.replace('+', " ").replace("%20", " ");
            if value.trim().is_empty() {
                continue;
            }
            match key {
                "category" => state.category = Some(value.parse()?),
                "collection" => state.collection = Some(value.parse()?),
                "sort" => state.sort = value.parse()?,
                other => log::debug!("Ignoring unknown filter parameter '{other}'"),
            }
        }

        Ok(state)
    }

    /// Select `category`, or clear it when it is already selected.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// Select `collection`, or clear it when it is already selected.
    pub fn toggle_collection(&mut self, collection: Collection) {
        self.collection = if self.collection == Some(collection) {
            None
        } else {
            Some(collection)
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Category or collection set; the sort key does not count.
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some() || self.collection.is_some()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |c| product.category == c)
            && self.collection.map_or(true, |c| product.collection == c)
    }
}

/// Produce the display-ordered view of `products` for `state`.
pub fn filter_and_sort<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = products.iter().filter(|p| state.matches(p)).collect();

    // sort_by_key is stable
    match state.sort {
        SortKey::PriceAsc => filtered.sort_by_key(|p| p.price),
        SortKey::PriceDesc => filtered.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortKey::Newest => filtered.sort_by_key(|p| !p.is_new),
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog;

    fn product(id: &str, price: u64, is_new: bool) -> Product {
        let mut p = catalog()[0].clone();
        p.id = id.to_string();
        p.price = price;
        p.is_new = is_new;
        p
    }

    fn ids(view: &[&Product]) -> Vec<String> {
        view.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_newest_is_stable_partition() {
        let products = vec![
            product("A", 10, true),
            product("B", 20, false),
            product("C", 30, true),
            product("D", 40, false),
        ];
        let view = filter_and_sort(&products, &FilterState::default());
        assert_eq!(ids(&view), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_price_sorts_keep_ties_in_catalog_order() {
        let products = vec![
            product("A", 300, false),
            product("B", 100, false),
            product("C", 300, false),
            product("D", 100, false),
        ];
        let asc = FilterState {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &asc)), vec!["B", "D", "A", "C"]);

        let desc = FilterState {
            sort: SortKey::PriceDesc,
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &desc)), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_category_filter_keeps_relative_order() {
        let state = FilterState {
            category: Some(Category::KanchipuramSilk),
            sort: SortKey::Newest,
            ..Default::default()
        };
        let view = filter_and_sort(catalog(), &state);
        assert!(view.iter().all(|p| p.category == Category::KanchipuramSilk));
        // sg-001 is the only new one, the rest keep catalog order
        assert_eq!(ids(&view), vec!["sg-001", "sg-002", "sg-004", "sg-007"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let state = FilterState {
            category: Some(Category::KanchipuramSilk),
            collection: Some(Collection::BridalHeritage),
            sort: SortKey::PriceAsc,
        };
        let view = filter_and_sort(catalog(), &state);
        assert_eq!(ids(&view), vec!["sg-001", "sg-007"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let state = FilterState {
            category: Some(Category::CottonSilk),
            ..Default::default()
        };
        assert!(filter_and_sort(catalog(), &state).is_empty());
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let products = catalog().to_vec();
        let state = FilterState {
            sort: SortKey::PriceDesc,
            ..Default::default()
        };
        let before = state;
        let _ = filter_and_sort(&products, &state);
        assert_eq!(products, catalog());
        assert_eq!(state, before);
    }

    #[test]
    fn test_from_query() -> Result<()> {
        let state = FilterState::from_query("?category=Kanchipuram+Silk&collection=&sort=price-desc&utm=x")?;
        assert_eq!(state.category, Some(Category::KanchipuramSilk));
        assert_eq!(state.collection, None);
        assert_eq!(state.sort, SortKey::PriceDesc);

        let state = FilterState::from_query("collection=Bridal%20Heritage")?;
        assert_eq!(state.collection, Some(Collection::BridalHeritage));
        assert_eq!(state.sort, SortKey::Newest);

        assert!(FilterState::from_query("sort=oldest").is_err());
        assert_eq!(FilterState::from_query("")?, FilterState::default());
        Ok(())
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut state = FilterState::default();
        state.toggle_category(Category::MysoreSilk);
        assert_eq!(state.category, Some(Category::MysoreSilk));
        assert!(state.has_active_filters());

        state.toggle_category(Category::MysoreSilk);
        assert_eq!(state.category, None);

        state.toggle_collection(Collection::Margazhi);
        state.sort = SortKey::PriceAsc;
        state.clear();
        assert_eq!(state, FilterState::default());
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_sort_key_round_trips_through_str() -> Result<()> {
        for key in [SortKey::Newest, SortKey::PriceAsc, SortKey::PriceDesc] {
            assert_eq!(key.to_string().parse::<SortKey>()?, key);
        }
        Ok(())
    }
}
