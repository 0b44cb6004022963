//! The signed-in user's profile and saved addresses, kept in the record store.

use crate::core::error::{Result, StorefrontError};
use crate::core::records::{decode_rows, next_sequence, RecordFilter, RecordStore, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

pub fn fetch_profile(store: &dyn RecordStore, user_id: &str) -> Result<Option<Profile>> {
    let rows = store.fetch(Table::Profiles, &RecordFilter::all().where_eq("user_id", user_id))?;
    Ok(decode_rows(Table::Profiles, rows)?.into_iter().next())
}

/// Update the given fields, creating the profile row on first save.
pub fn save_profile(
    store: &mut dyn RecordStore,
    user_id: &str,
    full_name: Option<&str>,
    phone: Option<&str>,
) -> Result<Profile> {
    let existing = fetch_profile(store, user_id)?;
    let existed = existing.is_some();
    let mut profile = existing.unwrap_or_else(|| Profile {
        user_id: user_id.to_string(),
        ..Profile::default()
    });

    if let Some(name) = full_name {
        profile.full_name = Some(name.trim().to_string());
    }
    if let Some(phone) = phone {
        profile.phone = Some(phone.trim().to_string());
    }

    let row = serde_json::to_value(&profile)?;
    if existed {
        store.update(
            Table::Profiles,
            &RecordFilter::all().where_eq("user_id", user_id),
            row,
        )?;
    } else {
        store.insert(Table::Profiles, row)?;
    }
    Ok(profile)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub label: String,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Address {
    /// One-line rendering: `line1, line2, city, state - pincode`.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.address_line1.as_str()];
        if let Some(line2) = self.address_line2.as_deref().filter(|l| !l.is_empty()) {
            parts.push(line2);
        }
        parts.push(&self.city);
        parts.push(&self.state);
        format!("{} - {}", parts.join(", "), self.pincode)
    }
}

/// Form input for a new address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub label: String,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
}

impl Default for NewAddress {
    fn default() -> Self {
        Self {
            label: "Home".to_string(),
            full_name: String::new(),
            phone: String::new(),
            address_line1: String::new(),
            address_line2: None,
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            is_default: false,
        }
    }
}

impl NewAddress {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("address line 1", &self.address_line1),
            ("city", &self.city),
            ("state", &self.state),
        ] {
            if value.trim().is_empty() {
                return Err(StorefrontError::invalid_address(format!("{field} is required")));
            }
        }

        let pincode = self.pincode.trim();
        if pincode.len() != 6 || !pincode.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::invalid_address(format!(
                "pincode must be 6 digits (got '{pincode}')"
            )));
        }
        Ok(())
    }
}

/// The user's addresses, most recently added first.
pub fn list_addresses(store: &dyn RecordStore, user_id: &str) -> Result<Vec<Address>> {
    let rows = store.fetch(Table::Addresses, &RecordFilter::all().where_eq("user_id", user_id))?;
    let mut addresses: Vec<Address> = decode_rows(Table::Addresses, rows)?;
    addresses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(addresses)
}

/// The default address, or the first listed one.
pub fn shipping_address(addresses: &[Address]) -> Option<&Address> {
    addresses
        .iter()
        .find(|a| a.is_default)
        .or_else(|| addresses.first())
}

pub fn add_address(store: &mut dyn RecordStore, user_id: &str, new: NewAddress) -> Result<Address> {
    new.validate()?;

    let existing = store.fetch(Table::Addresses, &RecordFilter::all())?;
    let seq = next_sequence(
        existing.iter().filter_map(|row| row.get("id")?.as_str()),
        "addr-",
    );

    if new.is_default {
        let cleared = store.update(
            Table::Addresses,
            &RecordFilter::all().where_eq("user_id", user_id),
            json!({ "is_default": false }),
        )?;
        log::debug!("Cleared default flag on {cleared} address(es)");
    }

    let address = Address {
        id: format!("addr-{seq}"),
        user_id: user_id.to_string(),
        label: new.label.trim().to_string(),
        full_name: new.full_name.trim().to_string(),
        phone: new.phone.trim().to_string(),
        address_line1: new.address_line1.trim().to_string(),
        address_line2: new
            .address_line2
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()),
        city: new.city.trim().to_string(),
        state: new.state.trim().to_string(),
        pincode: new.pincode.trim().to_string(),
        is_default: new.is_default,
        created_at: Utc::now(),
    };
    store.insert(Table::Addresses, serde_json::to_value(&address)?)?;
    Ok(address)
}

/// Delete one of the user's addresses. Other users' addresses are never touched.
pub fn delete_address(store: &mut dyn RecordStore, user_id: &str, address_id: &str) -> Result<()> {
    let removed = store.delete(
        Table::Addresses,
        &RecordFilter::all()
            .where_eq("user_id", user_id)
            .where_eq("id", address_id),
    )?;
    if removed == 0 {
        return Err(StorefrontError::address_not_found(address_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::MemoryRecordStore;

    fn chennai() -> NewAddress {
        NewAddress {
            full_name: "Priya Venkatesh".into(),
            phone: "+91 98765 43210".into(),
            address_line1: "45, Temple Street".into(),
            address_line2: Some("Near Kapaleeshwarar Temple".into()),
            city: "Chennai".into(),
            state: "Tamil Nadu".into(),
            pincode: "600004".into(),
            ..NewAddress::default()
        }
    }

    #[test]
    fn test_profile_upsert() -> Result<()> {
        let mut store = MemoryRecordStore::default();
        assert!(fetch_profile(&store, "u1")?.is_none());

        save_profile(&mut store, "u1", Some("Priya"), None)?;
        let saved = save_profile(&mut store, "u1", None, Some(" +91 98765 43210 "))?;
        assert_eq!(saved.full_name.as_deref(), Some("Priya"));
        assert_eq!(saved.phone.as_deref(), Some("+91 98765 43210"));

        assert_eq!(store.fetch(Table::Profiles, &RecordFilter::all())?.len(), 1);
        assert_eq!(fetch_profile(&store, "u1")?, Some(saved));
        Ok(())
    }

    #[test]
    fn test_address_validation() {
        let mut bad = chennai();
        bad.pincode = "6000".into();
        assert!(matches!(bad.validate(), Err(StorefrontError::InvalidAddress { .. })));

        let mut bad = chennai();
        bad.city = "  ".into();
        let err = bad.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid address: city is required");

        assert!(chennai().validate().is_ok());
    }

    #[test]
    fn test_new_default_clears_previous_default() -> Result<()> {
        let mut store = MemoryRecordStore::default();
        let first = add_address(&mut store, "u1", NewAddress { is_default: true, ..chennai() })?;
        let second = add_address(
            &mut store,
            "u1",
            NewAddress {
                address_line1: "12, Silk Bazaar Road".into(),
                city: "Kanchipuram".into(),
                pincode: "631501".into(),
                is_default: true,
                ..chennai()
            },
        )?;
        assert_eq!(first.id, "addr-1");
        assert_eq!(second.id, "addr-2");

        let addresses = list_addresses(&store, "u1")?;
        let defaults: Vec<_> = addresses.iter().filter(|a| a.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, "addr-2");
        assert_eq!(shipping_address(&addresses).map(|a| a.id.as_str()), Some("addr-2"));
        Ok(())
    }

    #[test]
    fn test_shipping_address_falls_back_to_first() -> Result<()> {
        let mut store = MemoryRecordStore::default();
        add_address(&mut store, "u1", chennai())?;
        let addresses = list_addresses(&store, "u1")?;
        assert_eq!(shipping_address(&addresses).map(|a| a.city.as_str()), Some("Chennai"));
        assert!(shipping_address(&[]).is_none());
        Ok(())
    }

    #[test]
    fn test_delete_is_scoped_to_owner() -> Result<()> {
        let mut store = MemoryRecordStore::default();
        let mine = add_address(&mut store, "u1", chennai())?;
        assert!(matches!(
            delete_address(&mut store, "u2", &mine.id),
            Err(StorefrontError::AddressNotFound { .. })
        ));
        delete_address(&mut store, "u1", &mine.id)?;
        assert!(list_addresses(&store, "u1")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_summary() -> Result<()> {
        let mut store = MemoryRecordStore::default();
        let address = add_address(&mut store, "u1", chennai())?;
        assert_eq!(
            address.summary(),
            "45, Temple Street, Near Kapaleeshwarar Temple, Chennai, Tamil Nadu - 600004"
        );
        Ok(())
    }
}
