//! Config-seeded auth adapter.
//!
//! Credentials come from the YAML config. This is the minimal collaborator
//! for a standalone deployment; a real installation plugs a directory-backed
//! adapter in instead.

use async_trait::async_trait;

use medillo::auth_adapter::AuthAdapter;
use medillo::prelude::*;

use crate::config::Account;

pub struct ConfigAuthAdapter {
	accounts: Vec<Account>,
}

impl ConfigAuthAdapter {
	pub fn new(accounts: Vec<Account>) -> Self {
		Self { accounts }
	}
}

impl std::fmt::Debug for ConfigAuthAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConfigAuthAdapter").field("accounts", &self.accounts.len()).finish()
	}
}

#[async_trait]
impl AuthAdapter for ConfigAuthAdapter {
	async fn verify_credentials(&self, user: &str, password: &str) -> ClResult<Option<Role>> {
		Ok(self
			.accounts
			.iter()
			.find(|account| account.user == user && account.password == password)
			.map(|account| account.role))
	}
}

// vim: ts=4
