//! Back-office product and taxonomy editing.
//!
//! Both editors work on an in-memory copy taken from the static catalog. Edits
//! last as long as the [`AdminCatalog`] or [`Taxonomy`] value and are never
//! written anywhere; the storefront keeps serving the static catalog.

use crate::core::catalog::{catalog, Category, Collection, Product};
use crate::core::error::{Result, StorefrontError};
use chrono::Utc;

/// A catalog entry as the back-office sees it. Category and collection are free
/// text because the taxonomy itself is editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProduct {
    pub id: String,
    pub name: String,
    pub tamil_name: Option<String>,
    pub price: u64,
    pub original_price: Option<u64>,
    pub category: String,
    pub collection: String,
    pub description: String,
    pub fabric: String,
    pub border_description: String,
    pub pallu_description: String,
    pub visible: bool,
}

impl From<&Product> for AdminProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            tamil_name: p.tamil_name.clone(),
            price: p.price,
            original_price: p.original_price,
            category: p.category.label().to_string(),
            collection: p.collection.label().to_string(),
            description: p.description.clone(),
            fabric: p.fabric.clone(),
            border_description: p.border_description.clone(),
            pallu_description: p.pallu_description.clone(),
            visible: true,
        }
    }
}

/// The product form as typed. Prices arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub tamil_name: String,
    pub price: String,
    pub original_price: String,
    pub category: String,
    pub collection: String,
    pub description: String,
    pub fabric: String,
    pub border_description: String,
    pub pallu_description: String,
}

struct ValidDraft {
    price: u64,
    original_price: Option<u64>,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_price(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| StorefrontError::invalid_price(value.trim()))
}

impl ProductDraft {
    /// Prefill the form from an existing product.
    pub fn from_product(product: &AdminProduct) -> Self {
        Self {
            name: product.name.clone(),
            tamil_name: product.tamil_name.clone().unwrap_or_default(),
            price: product.price.to_string(),
            original_price: product
                .original_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            category: product.category.clone(),
            collection: product.collection.clone(),
            description: product.description.clone(),
            fabric: product.fabric.clone(),
            border_description: product.border_description.clone(),
            pallu_description: product.pallu_description.clone(),
        }
    }

    fn validate(&self) -> Result<ValidDraft> {
        if self.name.trim().is_empty()
            || self.price.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err(StorefrontError::IncompleteProductDraft);
        }

        let price = parse_price(&self.price)?;
        let original_price = match self.original_price.trim() {
            "" => None,
            raw => Some(parse_price(raw)?),
        };
        Ok(ValidDraft {
            price,
            original_price,
        })
    }

    fn apply(&self, valid: ValidDraft, product: &mut AdminProduct) {
        product.name = self.name.trim().to_string();
        product.tamil_name = optional(&self.tamil_name);
        product.price = valid.price;
        product.original_price = valid.original_price;
        product.category = self.category.trim().to_string();
        product.collection = self.collection.trim().to_string();
        product.description = self.description.clone();
        product.fabric = self.fabric.clone();
        product.border_description = self.border_description.clone();
        product.pallu_description = self.pallu_description.clone();
    }
}

/// Local-only product list for the back-office.
#[derive(Debug, Clone)]
pub struct AdminCatalog {
    products: Vec<AdminProduct>,
}

impl Default for AdminCatalog {
    fn default() -> Self {
        Self::from_catalog()
    }
}

impl AdminCatalog {
    pub fn from_catalog() -> Self {
        Self {
            products: catalog().iter().map(AdminProduct::from).collect(),
        }
    }

    pub fn products(&self) -> &[AdminProduct] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&AdminProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive match on name, category or collection.
    pub fn search_products(&self, query: &str) -> Vec<&AdminProduct> {
        let query = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
                    || p.collection.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Add a new, visible product at the top of the list. Returns its id.
    pub fn add_product(&mut self, draft: &ProductDraft) -> Result<String> {
        let valid = draft.validate()?;

        let mut id = format!("sg-{}", Utc::now().timestamp_millis());
        while self.get(&id).is_some() {
            id.push('x');
        }

        let mut product = AdminProduct {
            id: id.clone(),
            name: String::new(),
            tamil_name: None,
            price: 0,
            original_price: None,
            category: String::new(),
            collection: String::new(),
            description: String::new(),
            fabric: String::new(),
            border_description: String::new(),
            pallu_description: String::new(),
            visible: true,
        };
        draft.apply(valid, &mut product);
        self.products.insert(0, product);
        Ok(id)
    }

    pub fn edit_product(&mut self, id: &str, draft: &ProductDraft) -> Result<()> {
        let valid = draft.validate()?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StorefrontError::product_not_found(id))?;
        draft.apply(valid, product);
        Ok(())
    }

    /// Flip visibility; returns the new state.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StorefrontError::product_not_found(id))?;
        product.visible = !product.visible;
        Ok(product.visible)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StorefrontError::product_not_found(id));
        }
        Ok(())
    }
}

/// Editable category and collection names. Blank input is ignored and reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    pub categories: Vec<String>,
    pub collections: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            categories: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
            collections: Collection::ALL.iter().map(|c| c.label().to_string()).collect(),
        }
    }
}

fn push_trimmed(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    list.push(value.to_string());
    true
}

fn rename_at(list: &mut [String], index: usize, value: &str) -> bool {
    let value = value.trim();
    match list.get_mut(index) {
        Some(slot) if !value.is_empty() => {
            *slot = value.to_string();
            true
        }
        _ => false,
    }
}

fn remove_at(list: &mut Vec<String>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}

impl Taxonomy {
    pub fn add_category(&mut self, name: &str) -> bool {
        push_trimmed(&mut self.categories, name)
    }

    pub fn add_collection(&mut self, name: &str) -> bool {
        push_trimmed(&mut self.collections, name)
    }

    pub fn rename_category(&mut self, index: usize, name: &str) -> bool {
        rename_at(&mut self.categories, index, name)
    }

    pub fn rename_collection(&mut self, index: usize, name: &str) -> bool {
        rename_at(&mut self.collections, index, name)
    }

    pub fn delete_category(&mut self, index: usize) -> bool {
        remove_at(&mut self.categories, index)
    }

    pub fn delete_collection(&mut self, index: usize) -> bool {
        remove_at(&mut self.collections, index)
    }
}
