//! Database schema initialization
//!
//! Creates the settings table and seeds install-time defaults.

use sqlx::SqlitePool;

/// Initialize the database schema
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			key text NOT NULL,
			value text,
			PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Install-time seed values, kept if already present
	sqlx::query(
		"INSERT OR IGNORE INTO settings (key, value) VALUES
			('site.maintenance_mode', '0'),
			('site.default_language', 'en')",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
