//! Shared test utilities for silk-storefront
//!
//! Every integration test runs the binary against its own temporary store
//! directory, so tests never touch the real config, data or cache locations.

pub mod assertions;
pub mod fixtures;
pub mod store;
