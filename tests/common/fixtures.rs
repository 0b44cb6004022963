//! Predefined store scenarios
//!
//! Provides stores with accounts, addresses and bag contents already in place
//! so tests can start from the state they care about.

#![allow(dead_code)]

use super::store::*;
use silk_storefront::core::error::Result;

pub const CUSTOMER_EMAIL: &str = "priya.v@email.com";
pub const CUSTOMER_PASSWORD: &str = "kanchi123";
pub const ADMIN_EMAIL: &str = "owner@sriganapathysilks.com";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// Scenario: a store where `products` has been run once with default filters
pub fn store_with_listing() -> Result<TestStore> {
    let store = setup_test_store()?;
    store.run(&["products"]);
    Ok(store)
}

/// Scenario: a signed-in customer with one default address
pub fn store_with_customer() -> Result<TestStore> {
    let store = setup_test_store()?;
    store.run(&[
        "signup",
        CUSTOMER_EMAIL,
        CUSTOMER_PASSWORD,
        "--name",
        "Priya Venkatesh",
    ]);
    store.run(&[
        "address",
        "add",
        "--name",
        "Priya Venkatesh",
        "--phone",
        "+91 98765 43210",
        "--line1",
        "45, Temple Street",
        "--city",
        "Chennai",
        "--state",
        "Tamil Nadu",
        "--pincode",
        "600004",
        "--default",
    ]);
    Ok(store)
}

/// Scenario: a signed-in admin (by config) on an otherwise empty store
pub fn store_with_admin() -> Result<TestStore> {
    let store = setup_test_store()?;
    write_config(&store, &[ADMIN_EMAIL])?;
    store.run(&["signup", ADMIN_EMAIL, ADMIN_PASSWORD]);
    Ok(store)
}
