//! Authentication adapter interface.
//!
//! Credential verification is an external collaborator. The server only
//! needs to know whether a login attempt maps to a role; everything else
//! (directories, password storage, federation) lives behind this trait.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait AuthAdapter: Debug + Send + Sync {
	/// Verify a credential pair.
	///
	/// Returns the role to grant the session, or `None` when the credentials
	/// do not match.
	async fn verify_credentials(&self, user: &str, password: &str) -> ClResult<Option<Role>>;
}

// vim: ts=4
