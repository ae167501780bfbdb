//! SQLite-backed settings store for the Medillo site server.
//!
//! Stores settings as raw string scalars in a single `settings` table.
//! Install-time defaults are seeded when the schema is created.

use async_trait::async_trait;
use std::{collections::HashMap, path::Path};

use sqlx::sqlite::{self, SqlitePool};

use medillo::prelude::*;
use medillo::settings_adapter::SettingsAdapter;

mod schema;
mod setting;

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn read_setting(&self, key: &str) -> ClResult<Option<String>> {
		setting::read(&self.db, key).await
	}

	async fn update_setting(&self, key: &str, value: Option<&str>) -> ClResult<()> {
		setting::update(&self.db, key, value).await
	}

	async fn list_settings(&self) -> ClResult<HashMap<String, String>> {
		setting::list(&self.db).await
	}
}

// vim: ts=4
