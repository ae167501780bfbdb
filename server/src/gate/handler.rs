//! Maintenance notice rendering

use axum::{extract::State, response::Html};
use serde_json::json;

use crate::core::extract::Sess;
use crate::prelude::*;

/// Render the maintenance notice. Admins get a bypass link to the dashboard.
///
/// The notice must render even while the settings store is down, so the site
/// name resolves leniently.
pub async fn render_notice(app: &App, is_admin: bool) -> ClResult<String> {
	let site_name = app
		.settings
		.get_or_default(crate::page::SITE_NAME)
		.await
		.unwrap_or_else(|| "Medillo".to_string());

	app.templates.render(
		"maintenance",
		&json!({
			"site_name": site_name,
			"bypass": is_admin,
		}),
	)
}

/// GET /maintenance - the notice page itself (exempt from the gate)
pub async fn get_maintenance(State(app): State<App>, Sess(sess): Sess) -> ClResult<Html<String>> {
	Ok(Html(render_notice(&app, sess.is_admin()).await?))
}

// vim: ts=4
