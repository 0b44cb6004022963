use crate::core::admin_catalog::{AdminCatalog, Taxonomy};
use crate::core::banners::{BannerBoard, BannerKind};
use crate::core::catalog::format_price;
use crate::core::command_init::StoreContext;
use crate::core::customers::{customer_orders, search_customers, seed_customers};
use crate::core::error::Result;
use crate::core::orders::{
    has_seed_orders, load_orders, search_orders, seed_orders_if_empty, update_order_status,
    OrderStatus,
};
use crate::core::output::{print_field, print_info, print_section_header, print_success};
use crate::core::reports::DashboardStats;
use crate::core::style::{colored_order_status, colored_payment_status};
use chrono::Utc;
use colored::*;

#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum AdminAction {
    /// List orders, optionally filtered
    Orders {
        /// Order id or customer name
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum)]
        status: Option<OrderStatus>,
    },
    /// Change an order's status
    OrderStatus {
        order_id: String,
        /// new, processing, shipped or delivered
        status: String,
    },
    /// List customers
    Customers {
        /// Name, email or phone
        #[arg(long)]
        search: Option<String>,
    },
    /// Sales dashboard
    Report,
    /// List catalog products as the back-office sees them
    ///
    /// Read-only. Adding, editing, hiding and deleting products are library
    /// operations on an in-memory copy with no command of their own; nothing
    /// they change is saved.
    Products {
        /// Name, category or collection
        #[arg(long)]
        search: Option<String>,
    },
    /// List categories and collections
    ///
    /// Read-only. Taxonomy edits are library-only and are not saved.
    Categories,
    /// List homepage and festival banners
    ///
    /// Read-only. Banner edits are library-only and are not saved.
    Banners,
}

/// Admin screens are behind the admin guard; the order list is seeded on first use.
pub fn execute_admin(ctx: &mut StoreContext, action: AdminAction) -> Result<()> {
    let admin = ctx.session().require_admin()?.clone();
    log::debug!("Admin action {action:?} by {}", admin.email);

    let seeded = seed_orders_if_empty(&mut ctx.records)?;
    if seeded > 0 {
        log::debug!("Loaded {seeded} sample order(s) into an empty store");
    }

    match action {
        AdminAction::Orders { search, status } => list_orders(ctx, search.as_deref(), status),
        AdminAction::OrderStatus { order_id, status } => {
            let status: OrderStatus = status.parse()?;
            let order = update_order_status(&mut ctx.records, &order_id, status, Utc::now())?;
            print_success(&format!("Order {} is now {}", order.id, order.status.label()));
            println!();
            Ok(())
        }
        AdminAction::Customers { search } => list_customers(ctx, search.as_deref()),
        AdminAction::Report => report(ctx),
        AdminAction::Products { search } => {
            list_products(search.as_deref());
            Ok(())
        }
        AdminAction::Categories => {
            list_taxonomy();
            Ok(())
        }
        AdminAction::Banners => {
            list_banners();
            Ok(())
        }
    }
}

fn list_orders(ctx: &StoreContext, search: Option<&str>, status: Option<OrderStatus>) -> Result<()> {
    let orders = load_orders(&ctx.records)?;
    let matches = search_orders(&orders, search.unwrap_or(""), status);

    if matches.is_empty() {
        print_info("No orders match");
        return Ok(());
    }

    print_section_header(&format!("Orders ({})", matches.len()));
    for order in matches {
        println!(
            "   {} {} {}  {}  {} {}",
            order.id.white().bold(),
            colored_order_status(order.status),
            order.customer_name,
            format_price(order.total_amount),
            colored_payment_status(order.payment_status),
            order.created_at.format("%Y-%m-%d").to_string().bright_black()
        );
    }
    println!();
    Ok(())
}

fn list_customers(ctx: &StoreContext, search: Option<&str>) -> Result<()> {
    let customers = seed_customers();
    let orders = load_orders(&ctx.records)?;
    let matches = search_customers(&customers, search.unwrap_or(""));

    if matches.is_empty() {
        print_info("No customers match");
        return Ok(());
    }

    print_section_header(&format!("Customers ({})", matches.len()));
    for customer in matches {
        println!(
            "   {} {} {}",
            customer.id.cyan().bold(),
            customer.name.white(),
            customer.email.bright_black()
        );
        println!(
            "      {}  {} orders  {} spent  {} on file",
            customer.phone,
            customer.total_orders,
            format_price(customer.total_spent),
            customer_orders(&orders, &customer.id).len()
        );
    }
    println!();
    Ok(())
}

fn report(ctx: &StoreContext) -> Result<()> {
    let orders = load_orders(&ctx.records)?;
    let stats = DashboardStats::compute(
        &orders,
        seed_customers().len(),
        Utc::now().date_naive(),
        ctx.config.home_section_limit,
    );

    if !has_seed_orders(&orders) {
        print_info("Sample orders were not loaded because the store already had orders");
    }

    print_section_header("Dashboard");
    print_field("Total sales", &format_price(stats.total_sales));
    print_field("Today's orders", &stats.today_orders.to_string());
    print_field("Customers", &stats.total_customers.to_string());
    print_field("Average order", &format_price(stats.average_order_value));

    print_section_header("Order status");
    for (status, count) in &stats.status_distribution {
        println!("   {} {}", colored_order_status(*status), count);
    }

    print_section_header("Monthly revenue");
    for (month, revenue) in &stats.monthly_revenue {
        println!("   {}  {}", month.bright_black(), format_price(*revenue));
    }

    print_section_header("Best sellers");
    for product in &stats.best_sellers {
        println!("   {}  {}", product.name.white(), format_price(product.price));
    }

    let recent: Vec<_> = orders.iter().take(5).collect();
    if !recent.is_empty() {
        print_section_header("Recent orders");
        for order in recent {
            println!(
                "   {} {} {}",
                order.id.white().bold(),
                order.customer_name,
                colored_order_status(order.status)
            );
        }
    }
    println!();
    Ok(())
}

fn list_products(search: Option<&str>) {
    let admin = AdminCatalog::from_catalog();
    let matches = admin.search_products(search.unwrap_or(""));

    if matches.is_empty() {
        print_info("No products match");
        return;
    }

    print_section_header(&format!("Products ({})", matches.len()));
    for product in matches {
        let visibility = if product.visible {
            "visible".green()
        } else {
            "hidden".bright_black()
        };
        println!(
            "   {} {}  {}  {} / {}  {}",
            product.id.cyan().bold(),
            product.name.white(),
            format_price(product.price),
            product.category,
            product.collection,
            visibility
        );
    }
    println!();
}

fn list_taxonomy() {
    let taxonomy = Taxonomy::default();
    print_section_header("Categories");
    for (i, category) in taxonomy.categories.iter().enumerate() {
        println!("   {} {}", format!("[{}]", i + 1).cyan().bold(), category);
    }
    print_section_header("Collections");
    for (i, collection) in taxonomy.collections.iter().enumerate() {
        println!("   {} {}", format!("[{}]", i + 1).cyan().bold(), collection);
    }
    println!();
}

fn list_banners() {
    let board = BannerBoard::default();
    for kind in BannerKind::ALL {
        print_section_header(kind.label());
        let banners = board.of_kind(kind);
        if banners.is_empty() {
            println!("   {}", "none".bright_black());
        }
        for banner in banners {
            let status = if banner.enabled {
                banner.status_label().green()
            } else {
                banner.status_label().bright_black()
            };
            println!(
                "   {} {}  {}",
                banner.id.cyan().bold(),
                banner.title.white(),
                status
            );
            println!("      {}", banner.subtitle.bright_black());
        }
    }
    println!();
}
