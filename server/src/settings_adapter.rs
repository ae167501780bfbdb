//! Settings store adapter interface.
//!
//! The settings store is an external collaborator: the server only assumes a
//! key-value surface over named, persisted scalar values. Values travel as
//! raw strings; interpretation (flag coercion, catalog membership) happens in
//! the settings service.

use async_trait::async_trait;
use std::{collections::HashMap, fmt::Debug};

use crate::prelude::*;

/// Key-value settings store.
///
/// An absent key is `Ok(None)`; a failed store query is `Err(Error::DbError)`.
/// The two are never conflated, so callers can apply an explicit policy to
/// store failures.
#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// Read a single setting value
	async fn read_setting(&self, key: &str) -> ClResult<Option<String>>;

	/// Update a setting, or delete it when `value` is `None`
	async fn update_setting(&self, key: &str, value: Option<&str>) -> ClResult<()>;

	/// List all stored settings
	async fn list_settings(&self) -> ClResult<HashMap<String, String>>;
}

// vim: ts=4
