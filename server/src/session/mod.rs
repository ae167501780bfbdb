//! Session subsystem.
//!
//! Sessions are per-client ephemeral state correlated by an opaque cookie.
//! Each session carries the caller's role and selected language. State is
//! kept in process; a background task sweeps expired entries.

pub mod middleware;
pub mod store;

pub use store::{Role, Session, SessionStore};

use crate::prelude::*;
use std::time::Duration;

/// Sweep interval for expired sessions
const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Spawn the periodic expiry sweep for the app's session store
pub fn start_sweeper(app: &App) {
	let app = app.clone();
	tokio::spawn(async move {
		let mut interval = tokio::time::interval(SWEEP_INTERVAL);
		loop {
			interval.tick().await;
			let removed = app.sessions.sweep();
			if removed > 0 {
				debug!("Swept {} expired sessions", removed);
			}
		}
	});
}

// vim: ts=4
