use crate::core::error::{Result, StorefrontError};
use std::path::PathBuf;

const APP_DIR: &str = "silk-storefront";

/// Overrides config, data and cache locations at once.
pub const HOME_ENV: &str = "SILK_STOREFRONT_HOME";

fn resolve(kind: &str, xdg_var: &str, fallback: Option<PathBuf>) -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(home).join(kind));
    }

    let base = std::env::var(xdg_var)
        .map(PathBuf::from)
        .ok()
        .or(fallback)
        .ok_or_else(|| StorefrontError::directory_not_found(kind))?;

    Ok(base.join(APP_DIR))
}

pub fn get_config_directory() -> Result<PathBuf> {
    resolve("config", "XDG_CONFIG_HOME", dirs::config_dir())
}

/// Cart, session, accounts and record tables live here.
pub fn get_data_directory() -> Result<PathBuf> {
    resolve("data", "XDG_DATA_HOME", dirs::data_dir())
}

/// Disposable state such as the last product listing.
pub fn get_cache_directory() -> Result<PathBuf> {
    resolve("cache", "XDG_CACHE_HOME", dirs::cache_dir())
}
