//! Temporary store directories and command construction
//!
//! Provides [`TestStore`], which points `SILK_STOREFRONT_HOME` at a fresh
//! temporary directory for every command it builds.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use silk_storefront::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary store home. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestStore {
    pub temp_dir: TempDir,
    pub home: PathBuf,
}

impl TestStore {
    pub fn path(&self) -> &Path {
        &self.home
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join("config")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.join("data")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.home.join("cache")
    }

    /// A `silk-storefront` command bound to this store, without colors.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("silk-storefront").expect("binary should build");
        cmd.env("SILK_STOREFRONT_HOME", &self.home)
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE");
        cmd
    }

    /// Run a command that is expected to succeed.
    pub fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }

    pub fn read_data_file(&self, name: &str) -> Result<serde_json::Value> {
        let content = fs::read_to_string(self.data_dir().join(name))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Sets up a fresh, empty store home
pub fn setup_test_store() -> Result<TestStore> {
    let temp_dir = TempDir::new()?;
    let home = temp_dir.path().to_path_buf();
    Ok(TestStore { temp_dir, home })
}

/// Writes `config.json` with the given admin emails
pub fn write_config(store: &TestStore, admin_emails: &[&str]) -> Result<()> {
    let config = serde_json::json!({
        "admin_emails": admin_emails,
        "default_sort": "newest",
        "home_section_limit": 4,
        "created_at": "2024-12-01T00:00:00Z",
    });
    fs::create_dir_all(store.config_dir())?;
    fs::write(
        store.config_dir().join("config.json"),
        serde_json::to_string_pretty(&config)?,
    )?;
    Ok(())
}
