//! Settings gate subsystem.
//!
//! Checks the `site.maintenance_mode` flag before serving any page and
//! short-circuits with the maintenance notice while it is enabled.
//! Administrators still receive the notice but with a bypass link to the
//! dashboard, which stays reachable alongside the settings API so the mode
//! can be switched off again.

pub mod handler;
pub mod middleware;
pub mod settings;

use serde::Deserialize;

/// Key of the maintenance flag in the settings store
pub const MAINTENANCE_MODE: &str = "site.maintenance_mode";

/// Behavior of the gate when the settings store query fails.
///
/// An absent row is not a failure: it resolves through the registry default.
/// The policy only applies to store errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
	/// Serve normally when the store is unreachable
	#[default]
	FailOpen,
	/// Serve the maintenance notice when the store is unreachable
	FailClosed,
}

// vim: ts=4
