//! In-memory adapters for integration tests

use async_trait::async_trait;
use std::collections::HashMap;

use medillo::auth_adapter::AuthAdapter;
use medillo::error::{ClResult, Error};
use medillo::session::Role;
use medillo::settings_adapter::SettingsAdapter;

/// HashMap-backed settings store
#[derive(Debug, Default)]
pub struct MemSettingsAdapter {
	values: parking_lot::RwLock<HashMap<String, String>>,
}

impl MemSettingsAdapter {
	pub fn with(values: &[(&str, &str)]) -> Self {
		let adapter = Self::default();
		{
			let mut map = adapter.values.write();
			for (key, value) in values {
				map.insert((*key).to_string(), (*value).to_string());
			}
		}
		adapter
	}
}

#[async_trait]
impl SettingsAdapter for MemSettingsAdapter {
	async fn read_setting(&self, key: &str) -> ClResult<Option<String>> {
		Ok(self.values.read().get(key).cloned())
	}

	async fn update_setting(&self, key: &str, value: Option<&str>) -> ClResult<()> {
		let mut values = self.values.write();
		match value {
			Some(value) => {
				values.insert(key.to_string(), value.to_string());
			}
			None => {
				values.remove(key);
			}
		}
		Ok(())
	}

	async fn list_settings(&self) -> ClResult<HashMap<String, String>> {
		Ok(self.values.read().clone())
	}
}

/// Settings store that fails every query, for gate policy tests
#[derive(Debug, Default)]
pub struct FailingSettingsAdapter;

#[async_trait]
impl SettingsAdapter for FailingSettingsAdapter {
	async fn read_setting(&self, _key: &str) -> ClResult<Option<String>> {
		Err(Error::DbError)
	}

	async fn update_setting(&self, _key: &str, _value: Option<&str>) -> ClResult<()> {
		Err(Error::DbError)
	}

	async fn list_settings(&self) -> ClResult<HashMap<String, String>> {
		Err(Error::DbError)
	}
}

/// Fixed-credential auth adapter
#[derive(Debug, Default)]
pub struct StaticAuthAdapter;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "sup3rsecret";
pub const STAFF_USER: &str = "nurse";
pub const STAFF_PASSWORD: &str = "ward1";

#[async_trait]
impl AuthAdapter for StaticAuthAdapter {
	async fn verify_credentials(&self, user: &str, password: &str) -> ClResult<Option<Role>> {
		match (user, password) {
			(ADMIN_USER, ADMIN_PASSWORD) => Ok(Some(Role::Admin)),
			(STAFF_USER, STAFF_PASSWORD) => Ok(Some(Role::Staff)),
			_ => Ok(None),
		}
	}
}

// vim: ts=4
