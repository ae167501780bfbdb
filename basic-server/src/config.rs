//! YAML configuration for the standalone server

use serde::Deserialize;
use std::path::Path;

use medillo::gate::GatePolicy;
use medillo::session::Role;

#[derive(Clone, Debug, Deserialize)]
pub struct Account {
	pub user: String,
	pub password: String,
	#[serde(default = "default_role")]
	pub role: Role,
}

fn default_role() -> Role {
	Role::Staff
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
	pub listen: String,
	pub db_dir: String,
	pub dist_dir: String,
	pub gate_policy: GatePolicy,
	pub session_ttl_secs: u64,
	pub accounts: Vec<Account>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			listen: "127.0.0.1:8080".to_string(),
			db_dir: "./data".to_string(),
			dist_dir: "./dist".to_string(),
			gate_policy: GatePolicy::FailOpen,
			session_ttl_secs: 8 * 3600,
			accounts: Vec::new(),
		}
	}
}

/// Load the configuration file, falling back to defaults when it is absent
pub fn load(path: impl AsRef<Path>) -> Result<Config, Box<dyn std::error::Error>> {
	let path = path.as_ref();
	if !path.exists() {
		tracing::warn!("Config file {} not found, using defaults", path.display());
		return Ok(Config::default());
	}

	let raw = std::fs::read_to_string(path)?;
	Ok(serde_yaml::from_str(&raw)?)
}

// vim: ts=4
