//! In-memory session store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use crate::types::Timestamp;

/// Caller role attached to a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
	#[default]
	#[serde(rename = "guest")]
	Guest,
	#[serde(rename = "staff")]
	Staff,
	#[serde(rename = "admin")]
	Admin,
}

/// Per-client session state
#[derive(Clone, Debug)]
pub struct Session {
	pub sid: Box<str>,
	pub role: Role,
	/// Selected language code, `None` until the caller picks one
	pub language: Option<Box<str>>,
	pub created_at: Timestamp,
	pub expires_at: Timestamp,
}

impl Session {
	pub fn is_authenticated(&self) -> bool {
		self.role != Role::Guest
	}

	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}
}

/// Session store with TTL-based expiry.
///
/// Concurrent writers race on last-write-wins terms; the per-session state is
/// scalar so no merge semantics are needed.
pub struct SessionStore {
	ttl: Duration,
	sessions: parking_lot::RwLock<HashMap<Box<str>, Session>>,
}

impl SessionStore {
	pub fn new(ttl: Duration) -> Self {
		Self { ttl, sessions: parking_lot::RwLock::new(HashMap::new()) }
	}

	/// Create a fresh guest session
	pub fn create(&self) -> Session {
		let now = Timestamp::now();
		let session = Session {
			sid: Uuid::new_v4().to_string().into(),
			role: Role::Guest,
			language: None,
			created_at: now,
			expires_at: Timestamp(now.0 + self.ttl.as_secs() as i64),
		};
		self.sessions.write().insert(session.sid.clone(), session.clone());
		session
	}

	/// Load a session by id, treating expired entries as absent
	pub fn load(&self, sid: &str) -> Option<Session> {
		let sessions = self.sessions.read();
		let session = sessions.get(sid)?;
		if session.expires_at < Timestamp::now() {
			return None;
		}
		Some(session.clone())
	}

	/// Set the session language. Returns false when the session is gone.
	pub fn set_language(&self, sid: &str, language: &str) -> bool {
		let mut sessions = self.sessions.write();
		match sessions.get_mut(sid) {
			Some(session) => {
				session.language = Some(language.into());
				true
			}
			None => false,
		}
	}

	/// Promote or demote the session role
	pub fn set_role(&self, sid: &str, role: Role) -> bool {
		let mut sessions = self.sessions.write();
		match sessions.get_mut(sid) {
			Some(session) => {
				session.role = role;
				true
			}
			None => false,
		}
	}

	/// Destroy a session (logout)
	pub fn destroy(&self, sid: &str) -> bool {
		self.sessions.write().remove(sid).is_some()
	}

	/// Remove expired sessions, returning how many were dropped
	pub fn sweep(&self) -> usize {
		let now = Timestamp::now();
		let mut sessions = self.sessions.write();
		let before = sessions.len();
		sessions.retain(|_, session| session.expires_at >= now);
		before - sessions.len()
	}

	pub fn len(&self) -> usize {
		self.sessions.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.read().is_empty()
	}
}


// vim: ts=4
