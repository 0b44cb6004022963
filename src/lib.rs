//! Silk Storefront - catalog, cart and back-office for a silk saree boutique.
//!
//! The library holds the storefront's model: a cart aggregate shared through a
//! single persisted [`CartService`], a pure catalog filter/sort engine, and the
//! account and record-store collaborators the account and admin screens use.
//! The `silk-storefront` binary drives it from the command line.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The cart aggregate and cart service
//! - Catalog data, filtering and sorting
//! - Numbered selection parsing
//! - Account/session and record store contracts
//! - Orders, customers, reports and catalog administration
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use crate::core::{
    // Catalog
    catalog,
    filter_and_sort,
    find_product,
    format_price,
    strip_ansi_codes,

    AccountService,
    AdminCatalog,
    // Cart
    Cart,
    CartLine,
    CartService,
    CartStore,
    Category,
    Collection,
    DashboardStats,
    FilterState,
    NumberParser,
    Order,
    OrderStatus,
    PaymentStatus,
    Product,
    RecordFilter,
    RecordStore,
    // Error handling
    Result,
    Selection,
    SessionView,
    SortKey,
    StoreConfig,
    StoreContext,
    StorefrontError,
    Table,
};
