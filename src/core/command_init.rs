//! Centralized initialization shared by every command.
//!
//! [`StoreContext`] is the application root: it resolves the state directories,
//! loads the configuration and builds the one cart service, account service and
//! record store that commands are handed. Nothing below it reaches for global
//! state.
//!
//! # Initialization Steps
//! 1. **Directories**: config, data and cache locations (see [`crate::core::dirs`])
//! 2. **Configuration**: `config.json`, created with defaults on first run
//! 3. **Cart**: restored from `cart.json`
//! 4. **Session**: accounts and the current session from the data directory
//! 5. **Records**: the JSON record store under `<data>/records/`

use crate::core::cart_service::{CartService, JsonCartStore};
use crate::core::catalog::{find_product, Product};
use crate::core::config::StoreConfig;
use crate::core::dirs::{get_cache_directory, get_config_directory, get_data_directory};
use crate::core::error::{Result, StorefrontError};
use crate::core::filter::FilterState;
use crate::core::records::JsonRecordStore;
use crate::core::selection::Selection;
use crate::core::session::{AccountService, LocalAccountService, SessionView};
use crate::core::state::{read_json_file, write_json_file, ListingCache};
use std::path::{Path, PathBuf};

const LISTING_FILE: &str = "listing.json";

pub struct StoreContext {
    pub config: StoreConfig,
    pub cache_dir: PathBuf,
    pub cart: CartService<JsonCartStore>,
    pub accounts: LocalAccountService,
    pub records: JsonRecordStore,
}

impl StoreContext {
    pub fn initialize() -> Result<Self> {
        let config_dir = get_config_directory()?;
        let data_dir = get_data_directory()?;
        let cache_dir = get_cache_directory()?;
        log::debug!(
            "Using config {}, data {}, cache {}",
            config_dir.display(),
            data_dir.display(),
            cache_dir.display()
        );
        Self::open_at(&config_dir, &data_dir, &cache_dir)
    }

    /// Build the context over explicit directories.
    pub fn open_at(config_dir: &Path, data_dir: &Path, cache_dir: &Path) -> Result<Self> {
        let config = StoreConfig::load_or_create_at(&config_dir.join(StoreConfig::FILE_NAME))?;
        let cart = CartService::load(JsonCartStore::new(data_dir))?;
        let accounts = LocalAccountService::open(data_dir, &config)?;
        let records = JsonRecordStore::new(data_dir);

        Ok(Self {
            config,
            cache_dir: cache_dir.to_path_buf(),
            cart,
            accounts,
            records,
        })
    }

    pub fn session(&self) -> SessionView {
        self.accounts.current_session()
    }

    fn listing_path(&self) -> PathBuf {
        self.cache_dir.join(LISTING_FILE)
    }

    /// Product ids from the last listing, or nothing when there has not been one.
    pub fn load_listing(&self) -> Vec<String> {
        match read_json_file::<ListingCache>(&self.listing_path()) {
            Ok(Some(cache)) => cache.product_ids,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load listing cache: {e}");
                Vec::new()
            }
        }
    }

    pub fn save_listing(&self, products: &[&Product], filter: FilterState) -> Result<()> {
        let ids = products.iter().map(|p| p.id.clone()).collect();
        write_json_file(&self.listing_path(), &ListingCache::new(ids, filter))
    }

    /// Resolve listing numbers and ids to catalog products.
    pub fn resolve_products(&self, args: &[String]) -> Result<Vec<&'static Product>> {
        let listing = self.load_listing();
        Selection::resolve(args, &listing)?
            .iter()
            .map(|id| find_product(id).ok_or_else(|| StorefrontError::product_not_found(id)))
            .collect()
    }

    pub fn resolve_product(&self, arg: &str) -> Result<&'static Product> {
        let listing = self.load_listing();
        let id = Selection::resolve_one(arg, &listing)?;
        find_product(&id).ok_or_else(|| StorefrontError::product_not_found(id))
    }
}
