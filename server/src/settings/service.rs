//! Settings service with caching, validation, and permission checks

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::prelude::*;
use crate::settings_adapter::SettingsAdapter;

use super::types::{FrozenSettingsRegistry, Setting};

const DEFAULT_CACHE_SIZE: usize = 100;

/// LRU cache for settings values
struct SettingsCache {
	cache: parking_lot::RwLock<LruCache<String, String>>,
}

impl SettingsCache {
	fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity)
			.or(NonZeroUsize::new(DEFAULT_CACHE_SIZE))
			.unwrap_or(NonZeroUsize::MIN);
		Self { cache: parking_lot::RwLock::new(LruCache::new(capacity)) }
	}

	fn get(&self, key: &str) -> Option<String> {
		self.cache.write().get(key).cloned()
	}

	fn put(&self, key: String, value: String) {
		self.cache.write().put(key, value);
	}

	fn invalidate(&self, key: &str) {
		self.cache.write().pop(key);
	}
}

/// Settings service - main interface for accessing and managing settings.
///
/// Holds the injected store handle; consumers receive the service through the
/// app state, never a global accessor.
pub struct SettingsService {
	registry: Arc<FrozenSettingsRegistry>,
	cache: SettingsCache,
	store: Arc<dyn SettingsAdapter>,
}

impl SettingsService {
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		store: Arc<dyn SettingsAdapter>,
		cache_size: usize,
	) -> Self {
		Self { registry, cache: SettingsCache::new(cache_size), store }
	}

	/// Get a setting value, resolving store value -> registry default.
	///
	/// `Ok(None)` means the setting is known but unconfigured and has no
	/// default. Unknown keys are a validation error.
	pub async fn get(&self, key: &str) -> ClResult<Option<String>> {
		if let Some(value) = self.cache.get(key) {
			debug!("Setting cache hit: {}", key);
			return Ok(Some(value));
		}

		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Some(value) = self.store.read_setting(key).await? {
			self.cache.put(key.to_string(), value.clone());
			return Ok(Some(value));
		}

		match &def.default {
			Some(default) => {
				self.cache.put(key.to_string(), default.clone());
				Ok(Some(default.clone()))
			}
			None => Ok(None),
		}
	}

	/// Get a setting value, falling back to the registry default when the
	/// store query fails. For render paths that must degrade gracefully
	/// instead of surfacing a store outage.
	pub async fn get_or_default(&self, key: &str) -> Option<String> {
		match self.get(key).await {
			Ok(value) => value,
			Err(err) => {
				warn!("Falling back to default for setting '{}': {}", key, err);
				self.registry.get(key).and_then(|def| def.default.clone())
			}
		}
	}

	/// Get a boolean-coerced flag value.
	///
	/// A flag is enabled only when the stored value is the literal string
	/// `"1"`. Absent values and any other string read as disabled.
	pub async fn get_flag(&self, key: &str) -> ClResult<bool> {
		Ok(self.get(key).await?.as_deref() == Some("1"))
	}

	/// Set a setting value with validation and a permission check against the
	/// caller's session role
	pub async fn set(&self, key: &str, value: &str, role: Role) -> ClResult<Setting> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if !def.permission.check(role) {
			warn!("Permission denied for setting '{}': requires {:?}", key, def.permission);
			return Err(Error::PermissionDenied);
		}

		if let Some(validator) = &def.validator {
			validator(value)?;
		}

		self.store.update_setting(key, Some(value)).await?;
		self.cache.invalidate(key);

		info!("Setting '{}' updated", key);

		Ok(Setting { key: key.to_string(), value: value.to_string(), updated_at: Timestamp::now() })
	}

	/// Delete a setting (falls back to the registry default)
	pub async fn delete(&self, key: &str, role: Role) -> ClResult<bool> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if !def.permission.check(role) {
			return Err(Error::PermissionDenied);
		}

		self.store.update_setting(key, None).await?;
		self.cache.invalidate(key);

		info!("Setting '{}' deleted", key);
		Ok(true)
	}

	/// Get reference to the registry (for listing all settings)
	pub fn registry(&self) -> &Arc<FrozenSettingsRegistry> {
		&self.registry
	}
}


// vim: ts=4
