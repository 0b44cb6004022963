//! The persisted record store collaborator.
//!
//! Account screens and the order back-office talk to storage only through
//! [`RecordStore`]: fetch, insert, update and delete over untyped JSON rows in a
//! fixed set of [`Table`]s. Typed models convert with [`decode_rows`].
//!
//! [`JsonRecordStore`] keeps one JSON array per table under `<data>/records/`.

use crate::core::error::{Result, StorefrontError};
use crate::core::state::{read_json_file, write_json_file};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Profiles,
    Addresses,
    Orders,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Profiles => "profiles",
            Table::Addresses => "addresses",
            Table::Orders => "orders",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A conjunction of field equality predicates. The empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    predicates: Vec<(String, Value)>,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, row: &Value) -> bool {
        self.predicates
            .iter()
            .all(|(field, expected)| row.get(field) == Some(expected))
    }
}

pub trait RecordStore {
    fn fetch(&self, table: Table, filter: &RecordFilter) -> Result<Vec<Value>>;
    fn insert(&mut self, table: Table, row: Value) -> Result<()>;
    /// Shallow-merge `patch` into every matching row; returns the number touched.
    fn update(&mut self, table: Table, filter: &RecordFilter, patch: Value) -> Result<usize>;
    fn delete(&mut self, table: Table, filter: &RecordFilter) -> Result<usize>;
}

/// Convert fetched rows into a typed model.
pub fn decode_rows<T: DeserializeOwned>(table: Table, rows: Vec<Value>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| StorefrontError::malformed_record(table.name(), e))
        })
        .collect()
}

fn merge(row: &mut Value, patch: &Value) {
    if let (Some(target), Some(fields)) = (row.as_object_mut(), patch.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
}

pub struct JsonRecordStore {
    root: PathBuf,
}

impl JsonRecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: data_dir.into().join("records"),
        }
    }

    fn table_path(&self, table: Table) -> PathBuf {
        self.root.join(format!("{}.json", table.name()))
    }

    fn read_table(&self, table: Table) -> Result<Vec<Value>> {
        Ok(read_json_file(&self.table_path(table))?.unwrap_or_default())
    }

    fn write_table(&self, table: Table, rows: &[Value]) -> Result<()> {
        write_json_file(&self.table_path(table), rows)
    }
}

impl RecordStore for JsonRecordStore {
    fn fetch(&self, table: Table, filter: &RecordFilter) -> Result<Vec<Value>> {
        let rows: Vec<Value> = self
            .read_table(table)?
            .into_iter()
            .filter(|row| filter.matches(row))
            .collect();
        log::debug!("Fetched {} row(s) from {table}", rows.len());
        Ok(rows)
    }

    fn insert(&mut self, table: Table, row: Value) -> Result<()> {
        let mut rows = self.read_table(table)?;
        rows.push(row);
        self.write_table(table, &rows)
    }

    fn update(&mut self, table: Table, filter: &RecordFilter, patch: Value) -> Result<usize> {
        let mut rows = self.read_table(table)?;
        let mut touched = 0;
        for row in rows.iter_mut().filter(|row| filter.matches(row)) {
            merge(row, &patch);
            touched += 1;
        }
        if touched > 0 {
            self.write_table(table, &rows)?;
        }
        log::debug!("Updated {touched} row(s) in {table}");
        Ok(touched)
    }

    fn delete(&mut self, table: Table, filter: &RecordFilter) -> Result<usize> {
        let rows = self.read_table(table)?;
        let before = rows.len();
        let kept: Vec<Value> = rows.into_iter().filter(|row| !filter.matches(row)).collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.write_table(table, &kept)?;
        }
        log::debug!("Deleted {removed} row(s) from {table}");
        Ok(removed)
    }
}

/// In-process store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: std::collections::HashMap<Table, Vec<Value>>,
}

impl RecordStore for MemoryRecordStore {
    fn fetch(&self, table: Table, filter: &RecordFilter) -> Result<Vec<Value>> {
        Ok(self
            .tables
            .get(&table)
            .map(|rows| rows.iter().filter(|r| filter.matches(r)).cloned().collect())
            .unwrap_or_default())
    }

    fn insert(&mut self, table: Table, row: Value) -> Result<()> {
        self.tables.entry(table).or_default().push(row);
        Ok(())
    }

    fn update(&mut self, table: Table, filter: &RecordFilter, patch: Value) -> Result<usize> {
        let rows = self.tables.entry(table).or_default();
        let mut touched = 0;
        for row in rows.iter_mut().filter(|row| filter.matches(row)) {
            merge(row, &patch);
            touched += 1;
        }
        Ok(touched)
    }

    fn delete(&mut self, table: Table, filter: &RecordFilter) -> Result<usize> {
        let rows = self.tables.entry(table).or_default();
        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        Ok(before - rows.len())
    }
}

/// One past the highest numeric suffix among `ids` that start with `prefix`.
pub fn next_sequence<'a>(ids: impl IntoIterator<Item = &'a str>, prefix: &str) -> u32 {
    ids.into_iter()
        .filter_map(|id| id.strip_prefix(prefix)?.parse::<u32>().ok())
        .max()
        .map_or(1, |n| n.saturating_add(1))
}
