//! Core functionality for the silk storefront.
//!
//! This module provides the cart aggregate, the catalog filter engine, the
//! collaborator contracts (accounts and records), the back-office models,
//! state persistence, error handling and output formatting.

pub mod admin_catalog;
pub mod banners;
pub mod cart;
pub mod cart_service;
pub mod catalog;
pub mod command_init;
pub mod config;
pub mod customers;
pub mod dirs;
pub mod error;
pub mod filter;
pub mod orders;
pub mod output;
pub mod profile;
pub mod records;
pub mod reports;
pub mod selection;
pub mod session;
pub mod state;
pub mod style;

// === Error handling ===
pub use error::{Result, StorefrontError};

// === Cart ===
// The aggregate and the shared service that persists and broadcasts it
pub use cart::{Cart, CartLine};
pub use cart_service::{CartService, CartStore, JsonCartStore, MemoryCartStore};

// === Catalog ===
pub use catalog::{catalog, find_product, format_price, Category, Collection, Product};
pub use filter::{filter_and_sort, FilterState, SortKey};

// === Selection ===
// Parser for handling user input like "1 3-5,8" -> [1, 3, 4, 5, 8]
pub use selection::{NumberParser, Selection};

// === Collaborators ===
pub use records::{JsonRecordStore, MemoryRecordStore, RecordFilter, RecordStore, Table};
pub use session::{AccountService, LocalAccountService, Session, SessionView, User};

// === Back-office ===
pub use admin_catalog::{AdminCatalog, AdminProduct, ProductDraft, Taxonomy};
pub use banners::{Banner, BannerBoard, BannerKind};
pub use customers::Customer;
pub use orders::{Order, OrderStatus, PaymentStatus};
pub use reports::DashboardStats;

// === Application root ===
pub use command_init::StoreContext;
pub use config::StoreConfig;

// === Output formatting ===
pub use output::{print_error, print_error_with_usage, print_info, print_section_header, print_success};
pub use style::strip_ansi_codes;
