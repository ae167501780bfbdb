//! Settings key-value store management

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use medillo::prelude::*;

/// List all stored settings
pub(crate) async fn list(db: &SqlitePool) -> ClResult<HashMap<String, String>> {
	let rows = sqlx::query("SELECT key, value FROM settings")
		.fetch_all(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	let mut settings = HashMap::new();
	for row in rows {
		let key: String = row.get("key");
		let value: Option<String> = row.get("value");
		if let Some(value) = value {
			settings.insert(key, value);
		}
	}

	Ok(settings)
}

/// Read a single setting by key
pub(crate) async fn read(db: &SqlitePool, key: &str) -> ClResult<Option<String>> {
	let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
		.bind(key)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value
	}))
}

/// Update or create a setting, deleting the row when `value` is `None`
pub(crate) async fn update(db: &SqlitePool, key: &str, value: Option<&str>) -> ClResult<()> {
	if let Some(value) = value {
		sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
			.bind(key)
			.bind(value)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	} else {
		sqlx::query("DELETE FROM settings WHERE key = ?")
			.bind(key)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
