//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`StorefrontError`] which covers every failure the storefront
//! can report. It uses `thiserror` for the error definitions and provides
//! constructor helpers for the variants that carry context.
//!
//! # Public API
//! - [`StorefrontError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StorefrontError>`
//!
//! # Error Categories
//! - **Validation**: selection grammar, credentials, addresses, product drafts, filters
//! - **Collaborators**: sign-in failures, missing session, admin guard
//! - **Not found**: unknown products, orders, addresses
//! - **State files**: directory creation, read, parse, serialization and write failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for the storefront
#[derive(Error, Debug)]
pub enum StorefrontError {
    // Catalog lookups
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Unknown category: '{value}'")]
    UnknownCategory { value: String },

    #[error("Unknown collection: '{value}'")]
    UnknownCollection { value: String },

    #[error("Unknown sort key: '{value}'. Use one of: newest, price-asc, price-desc")]
    UnknownSortKey { value: String },

    // Selection parsing
    #[error("No products selected. Usage: <command> <numbers or ids>\nExample: add 1 3-5,8")]
    NoSelectionProvided,

    #[error("Invalid selection: {input}. Use format like: 1, 1-3, 1,3,5 or a product id")]
    InvalidSelection { input: String },

    #[error("Invalid range format: '{range}'. Use format like '3-6'")]
    InvalidRangeFormat { range: String },

    #[error("Invalid number in range: '{number}'")]
    InvalidRangeNumber { number: String },

    #[error("Invalid range: start ({start}) must be <= end ({end})")]
    InvalidRangeOrder { start: usize, end: usize },

    #[error("Invalid number: '{number}'")]
    InvalidNumber { number: String },

    #[error("Number must be positive (got 0)")]
    ZeroIndex,

    #[error("Number {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("No products listed. Run 'products' first to see numbered products.")]
    NoListing,

    // Cart
    #[error("Your bag is empty")]
    EmptyCart,

    #[error("Invalid quantity: '{value}'")]
    InvalidQuantity { value: String },

    // Account and session
    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Login failed: {reason}")]
    SignInFailed { reason: String },

    #[error("An account already exists for {email}")]
    AccountExists { email: String },

    #[error("Not signed in. Run 'login <email> <password>' first.")]
    NotSignedIn,

    #[error("Admin access required")]
    AdminRequired,

    // Records
    #[error("Address not found: {id}")]
    AddressNotFound { id: String },

    #[error("No shipping address on file. Add one with 'address add'.")]
    NoShippingAddress,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Order not found: {id}")]
    OrderNotFound { id: String },

    #[error("Unknown order status: '{value}'. Use one of: new, processing, shipped, delivered")]
    UnknownOrderStatus { value: String },

    #[error("Malformed record in '{table}': {source}")]
    MalformedRecord {
        table: String,
        source: serde_json::Error,
    },

    // Admin catalog
    #[error("Missing fields: Please fill in name, price and category.")]
    IncompleteProductDraft,

    #[error("Invalid price: '{value}'")]
    InvalidPrice { value: String },

    // State files
    #[error("Could not determine the {kind} directory")]
    DirectoryNotFound { kind: String },

    #[error("Failed to create state directory '{path}': {source}")]
    StateDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize state data: {source}")]
    StateSerializationFailed { source: serde_json::Error },

    #[error("Failed to write state file '{path}': {source}")]
    StateWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read state file '{path}': {source}")]
    StateReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    StateParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using StorefrontError
pub type Result<T> = std::result::Result<T, StorefrontError>;

impl StorefrontError {
    /// Create a product not found error
    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::ProductNotFound { id: id.into() }
    }

    pub fn unknown_category(value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            value: value.into(),
        }
    }

    pub fn unknown_collection(value: impl Into<String>) -> Self {
        Self::UnknownCollection {
            value: value.into(),
        }
    }

    pub fn unknown_sort_key(value: impl Into<String>) -> Self {
        Self::UnknownSortKey {
            value: value.into(),
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(input: impl Into<String>) -> Self {
        Self::InvalidSelection {
            input: input.into(),
        }
    }

    /// Create an invalid range format error
    pub fn invalid_range_format(range: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            range: range.into(),
        }
    }

    /// Create an invalid range number error
    pub fn invalid_range_number(number: impl Into<String>) -> Self {
        Self::InvalidRangeNumber {
            number: number.into(),
        }
    }

    /// Create an invalid range order error
    pub fn invalid_range_order(start: usize, end: usize) -> Self {
        Self::InvalidRangeOrder { start, end }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    pub fn invalid_quantity(value: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            value: value.into(),
        }
    }

    /// Create a sign-in failure carrying the collaborator's reason
    pub fn sign_in_failed(reason: impl Into<String>) -> Self {
        Self::SignInFailed {
            reason: reason.into(),
        }
    }

    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
        }
    }

    pub fn address_not_found(id: impl Into<String>) -> Self {
        Self::AddressNotFound { id: id.into() }
    }

    pub fn invalid_address(reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            reason: reason.into(),
        }
    }

    pub fn order_not_found(id: impl Into<String>) -> Self {
        Self::OrderNotFound { id: id.into() }
    }

    pub fn unknown_order_status(value: impl Into<String>) -> Self {
        Self::UnknownOrderStatus {
            value: value.into(),
        }
    }

    /// Create an error for a stored row that no longer matches its model
    pub fn malformed_record(table: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedRecord {
            table: table.into(),
            source,
        }
    }

    pub fn invalid_price(value: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value: value.into(),
        }
    }

    pub fn directory_not_found(kind: impl Into<String>) -> Self {
        Self::DirectoryNotFound { kind: kind.into() }
    }

    /// Create a state directory creation failed error
    pub fn state_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StateDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state serialization failed error
    pub fn state_serialization_failed(source: serde_json::Error) -> Self {
        Self::StateSerializationFailed { source }
    }

    /// Create a state write failed error
    pub fn state_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state read failed error
    pub fn state_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state parse failed error
    pub fn state_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StateParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from validating user input rather than from I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. }
                | Self::UnknownCollection { .. }
                | Self::UnknownSortKey { .. }
                | Self::NoSelectionProvided
                | Self::InvalidSelection { .. }
                | Self::InvalidRangeFormat { .. }
                | Self::InvalidRangeNumber { .. }
                | Self::InvalidRangeOrder { .. }
                | Self::InvalidNumber { .. }
                | Self::ZeroIndex
                | Self::IndexOutOfRange { .. }
                | Self::InvalidQuantity { .. }
                | Self::InvalidEmail
                | Self::PasswordTooShort
                | Self::InvalidAddress { .. }
                | Self::UnknownOrderStatus { .. }
                | Self::IncompleteProductDraft
                | Self::InvalidPrice { .. }
        )
    }
}
