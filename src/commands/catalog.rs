use crate::core::catalog::{best_sellers, catalog, featured, new_arrivals, Category, Collection, Product};
use crate::core::command_init::StoreContext;
use crate::core::error::Result;
use crate::core::filter::{filter_and_sort, FilterState, SortKey};
use crate::core::output::{print_field, print_info, print_section_header};
use crate::core::style::{format_badges, format_price_tag, format_product_line};
use colored::*;

/// Options of the `products` command. Flags win over `--query`.
#[derive(Debug, Clone, Default)]
pub struct ProductsArgs {
    pub category: Option<String>,
    pub collection: Option<String>,
    pub sort: Option<SortKey>,
    pub query: Option<String>,
}

impl ProductsArgs {
    pub fn filter_state(&self, default_sort: SortKey) -> Result<FilterState> {
        let mut state = match &self.query {
            Some(query) => FilterState::from_query(query)?,
            None => FilterState {
                sort: default_sort,
                ..FilterState::default()
            },
        };

        if let Some(category) = &self.category {
            state.category = Some(category.parse::<Category>()?);
        }
        if let Some(collection) = &self.collection {
            state.collection = Some(collection.parse::<Collection>()?);
        }
        if let Some(sort) = self.sort {
            state.sort = sort;
        }
        Ok(state)
    }
}

fn describe_filters(state: &FilterState) -> String {
    let mut parts = Vec::new();
    if let Some(category) = state.category {
        parts.push(category.label().to_string());
    }
    if let Some(collection) = state.collection {
        parts.push(collection.label().to_string());
    }
    parts.push(format!("sorted by {}", state.sort.label()));
    parts.join(" · ")
}

pub fn execute_products(ctx: &StoreContext, args: ProductsArgs) -> Result<()> {
    let state = args.filter_state(ctx.config.default_sort)?;
    let products = filter_and_sort(catalog(), &state);
    log::debug!("Listing {} of {} products", products.len(), catalog().len());

    // Cache even an empty listing so stale numbers cannot be reused
    if let Err(e) = ctx.save_listing(&products, state) {
        log::warn!("Listing cache save failed (products command will continue): {e}");
    }

    if products.is_empty() {
        let hint = if state.has_active_filters() {
            "No sarees match these filters. Try clearing a filter."
        } else {
            "No sarees in the catalog."
        };
        print_info(hint);
        return Ok(());
    }

    print_section_header(&format!(
        "Products ({}) {}",
        products.len(),
        describe_filters(&state).bright_black()
    ));
    for (i, product) in products.iter().enumerate() {
        println!("   {}", format_product_line(i + 1, product));
    }
    println!();
    Ok(())
}

pub fn execute_show(ctx: &StoreContext, product: &str) -> Result<()> {
    let product = ctx.resolve_product(product)?;

    println!();
    println!("{} {}", product.name.white().bold(), format_badges(product));
    if let Some(tamil) = &product.tamil_name {
        println!("{}", tamil.bright_black());
    }
    println!();
    print_field("Price", &format_price_tag(product));
    print_field("Category", product.category.label());
    print_field("Collection", product.collection.label());
    print_field("Fabric", &product.fabric);
    print_field("Border", &product.border_description);
    print_field("Pallu", &product.pallu_description);
    println!();
    println!("   {}", product.description);

    if let Some(line) = ctx.cart.cart().line(&product.id) {
        println!();
        print_field("In your bag", &line.quantity.to_string());
    }
    println!();
    Ok(())
}

fn print_section(title: &str, products: &[&'static Product], start: usize) {
    print_section_header(title);
    for (i, product) in products.iter().enumerate() {
        println!("   {}", format_product_line(start + i, product));
    }
}

/// The landing page: new arrivals, best sellers and featured pieces.
pub fn execute_home(ctx: &StoreContext) -> Result<()> {
    let limit = ctx.config.home_section_limit;
    let sections = [
        ("New Arrivals", new_arrivals(limit)),
        ("Best Sellers", best_sellers(limit)),
        ("Featured", featured(limit)),
    ];

    let mut numbered: Vec<&'static Product> = Vec::new();
    for (title, products) in &sections {
        print_section(title, products, numbered.len() + 1);
        numbered.extend(products.iter().copied());
    }
    println!();

    if let Err(e) = ctx.save_listing(&numbered, FilterState::default()) {
        log::warn!("Listing cache save failed (home command will continue): {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_query() -> Result<()> {
        let args = ProductsArgs {
            category: Some("mysore-silk".into()),
            query: Some("category=Banarasi+Silk&sort=price-desc".into()),
            ..ProductsArgs::default()
        };
        let state = args.filter_state(SortKey::Newest)?;
        assert_eq!(state.category, Some(Category::MysoreSilk));
        assert_eq!(state.sort, SortKey::PriceDesc);
        Ok(())
    }

    #[test]
    fn test_default_sort_from_config() -> Result<()> {
        let state = ProductsArgs::default().filter_state(SortKey::PriceAsc)?;
        assert_eq!(state.sort, SortKey::PriceAsc);
        assert!(!state.has_active_filters());
        Ok(())
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let args = ProductsArgs {
            category: Some("Polyester".into()),
            ..ProductsArgs::default()
        };
        assert!(args.filter_state(SortKey::Newest).is_err());
    }

    #[test]
    fn test_describe_filters() {
        let state = FilterState {
            category: Some(Category::TussarSilk),
            collection: None,
            sort: SortKey::PriceAsc,
        };
        assert_eq!(describe_filters(&state), "Tussar Silk · sorted by Price: Low → High");
    }
}
