use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, store::*};

#[cfg(test)]
mod admin_command_tests {
    use super::*;

    #[test]
    fn test_admin_requires_sign_in() -> anyhow::Result<()> {
        let store = setup_test_store()?;

        store
            .cmd()
            .args(["admin", "orders"])
            .assert()
            .failure()
            .stdout(assertions::is_error("Admin access required"));

        Ok(())
    }

    #[test]
    fn test_admin_rejects_customers() -> anyhow::Result<()> {
        let store = store_with_customer()?;

        store
            .cmd()
            .args(["admin", "report"])
            .assert()
            .failure()
            .stdout(assertions::is_error("Admin access required"));

        Ok(())
    }

    #[test]
    fn test_admin_orders_loads_samples_into_empty_store() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "orders"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Orders (6)"))
            .stdout(predicate::str::contains("ORD-2024-001"))
            .stdout(predicate::str::contains("ORD-2024-006"))
            .stdout(predicate::str::contains("Anitha Krishnan"));

        Ok(())
    }

    #[test]
    fn test_admin_orders_filters() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "orders", "--status", "delivered"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Orders (2)"))
            .stdout(predicate::str::contains("ORD-2024-004"))
            .stdout(predicate::str::contains("ORD-2024-006"))
            .stdout(predicate::str::contains("ORD-2024-001").not());

        store
            .cmd()
            .args(["admin", "orders", "--search", "lakshmi"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Orders (1)"))
            .stdout(predicate::str::contains("ORD-2024-002"));

        store
            .cmd()
            .args(["admin", "orders", "--search", "nobody"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No orders match"));

        Ok(())
    }

    #[test]
    fn test_admin_order_status_update() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "order-status", "ORD-2024-001", "Shipped"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Order ORD-2024-001 is now Shipped"));

        store
            .cmd()
            .args(["admin", "orders", "--status", "shipped"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Orders (2)"))
            .stdout(predicate::str::contains("ORD-2024-001"))
            .stdout(predicate::str::contains("ORD-2024-003"));

        Ok(())
    }

    #[test]
    fn test_admin_order_status_errors() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "order-status", "ORD-2024-001", "lost"])
            .assert()
            .failure()
            .stdout(assertions::is_error("Unknown order status: 'lost'"));

        store
            .cmd()
            .args(["admin", "order-status", "ORD-2099-001", "new"])
            .assert()
            .failure()
            .stdout(assertions::is_error("Order not found: ORD-2099-001"));

        Ok(())
    }

    #[test]
    fn test_admin_customers_search() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "customers"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Customers (5)"));

        store
            .cmd()
            .args(["admin", "customers", "--search", "meena"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Customers (1)"))
            .stdout(predicate::str::contains("Meenakshi Sundaram"));

        Ok(())
    }

    #[test]
    fn test_admin_report() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "report"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dashboard"))
            .stdout(predicate::str::contains("Total sales: ₹3,74,000"))
            .stdout(predicate::str::contains("Customers: 5"))
            .stdout(predicate::str::contains("Average order: ₹62,333"))
            .stdout(predicate::str::contains("2024-11"))
            .stdout(predicate::str::contains("Best sellers"))
            .stdout(predicate::str::contains("Emerald Temple Silk"));

        Ok(())
    }

    #[test]
    fn test_admin_products_and_categories() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "products", "--search", "bridal"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Products (2)"))
            .stdout(predicate::str::contains("Royal Burgundy Bridal Silk"))
            .stdout(predicate::str::contains("Classic Magenta Bridal"))
            .stdout(predicate::str::contains("visible"));

        store
            .cmd()
            .args(["admin", "categories"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Categories"))
            .stdout(predicate::str::contains("Kanchipuram Silk"))
            .stdout(predicate::str::contains("Collections"))
            .stdout(predicate::str::contains("Temple Collection"));

        Ok(())
    }

    #[test]
    fn test_admin_banners_grouped_by_kind() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "banners"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hero Banners"))
            .stdout(predicate::str::contains("b1 Bridal Collection 2024  Active"))
            .stdout(predicate::str::contains("Festival Banners"))
            .stdout(predicate::str::contains("b3 Pongal Collection  Disabled"))
            .stdout(predicate::str::contains("Exquisite sarees for Pongal celebrations"));

        Ok(())
    }

    #[test]
    fn test_admin_report_after_early_checkout_has_no_samples() -> anyhow::Result<()> {
        let store = store_with_customer()?;
        write_config(&store, &[ADMIN_EMAIL])?;
        store.run(&["add", "sg-008"]);
        store.run(&["checkout"]);
        store.run(&["logout"]);
        store.run(&["signup", ADMIN_EMAIL, ADMIN_PASSWORD]);

        store
            .cmd()
            .args(["admin", "report"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Sample orders were not loaded because the store already had orders",
            ))
            .stdout(predicate::str::contains("Total sales: ₹22,000"));

        Ok(())
    }

    #[test]
    fn test_admin_report_with_samples_has_no_note() -> anyhow::Result<()> {
        let store = store_with_admin()?;

        store
            .cmd()
            .args(["admin", "report"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Sample orders were not loaded").not());

        Ok(())
    }

    #[test]
    fn test_admin_listing_help_says_editors_are_library_only() -> anyhow::Result<()> {
        let store = setup_test_store()?;

        store
            .cmd()
            .args(["admin", "products", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Read-only"))
            .stdout(predicate::str::contains("nothing they change is saved"));

        store
            .cmd()
            .args(["admin", "categories", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Taxonomy edits are library-only"));

        Ok(())
    }
}
