use std::{env, path::PathBuf, sync::Arc, time::Duration};

use medillo::AppBuilder;
use medillo_settings_adapter_sqlite::SettingsAdapterSqlite;

mod auth;
mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config_path = env::var("MEDILLO_CONFIG").unwrap_or_else(|_| "./medillo.yaml".to_string());
	let config = config::load(&config_path)?;

	tokio::fs::create_dir_all(&config.db_dir).await?;
	let settings_adapter = Arc::new(
		SettingsAdapterSqlite::new(PathBuf::from(&config.db_dir).join("settings.db")).await?,
	);
	let auth_adapter = Arc::new(auth::ConfigAuthAdapter::new(config.accounts.clone()));

	AppBuilder::new()
		.listen(config.listen.as_str())
		.dist_dir(PathBuf::from(&config.dist_dir))
		.gate_policy(config.gate_policy)
		.session_ttl(Duration::from_secs(config.session_ttl_secs))
		.settings_adapter(settings_adapter)
		.auth_adapter(auth_adapter)
		.run()
		.await?;

	Ok(())
}

// vim: ts=4
