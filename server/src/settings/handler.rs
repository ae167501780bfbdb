//! Settings management handlers
//!
//! Admin API used by the dashboard to inspect and toggle runtime settings
//! (most notably `site.maintenance_mode`).

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::core::extract::Sess;
use crate::prelude::*;

/// Response for a single setting with metadata
#[derive(serde::Serialize)]
pub struct SettingResponse {
	pub key: String,
	pub value: Option<String>,
	pub permission: String,
	pub description: String,
}

/// GET /api/settings - List all registered settings with their current values
pub async fn list_settings(
	State(app): State<App>,
	Sess(sess): Sess,
) -> ClResult<(StatusCode, Json<Vec<SettingResponse>>)> {
	if !sess.is_admin() {
		return Err(Error::PermissionDenied);
	}

	let mut settings = Vec::new();
	for definition in app.settings.registry().list() {
		let value = app.settings.get(&definition.key).await?;
		settings.push(SettingResponse {
			key: definition.key.clone(),
			value,
			permission: format!("{:?}", definition.permission),
			description: definition.description.clone(),
		});
	}
	settings.sort_by(|a, b| a.key.cmp(&b.key));

	Ok((StatusCode::OK, Json(settings)))
}

/// GET /api/settings/{key} - Get a specific setting with metadata
pub async fn get_setting(
	State(app): State<App>,
	Sess(sess): Sess,
	Path(key): Path<String>,
) -> ClResult<(StatusCode, Json<SettingResponse>)> {
	if !sess.is_admin() {
		return Err(Error::PermissionDenied);
	}

	let definition = app.settings.registry().get(&key).ok_or(Error::NotFound)?;
	let value = app.settings.get(&key).await?;

	let response = SettingResponse {
		key: definition.key.clone(),
		value,
		permission: format!("{:?}", definition.permission),
		description: definition.description.clone(),
	};

	Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/settings/{key} - Update a setting
#[derive(Deserialize)]
pub struct UpdateSettingRequest {
	pub value: String,
}

pub async fn update_setting(
	State(app): State<App>,
	Sess(sess): Sess,
	Path(key): Path<String>,
	Json(req): Json<UpdateSettingRequest>,
) -> ClResult<(StatusCode, Json<crate::settings::Setting>)> {
	// The service enforces the per-setting permission level
	let setting = app.settings.set(&key, &req.value, sess.role).await?;

	info!("Session {} updated setting {}", sess.sid, key);

	Ok((StatusCode::OK, Json(setting)))
}

// vim: ts=4
