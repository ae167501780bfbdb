//! Page handlers

use axum::{extract::State, response::Html};
use serde_json::json;

use crate::core::extract::Sess;
use crate::locale;
use crate::prelude::*;

async fn site_name(app: &App) -> String {
	app.settings.get_or_default(super::SITE_NAME).await.unwrap_or_else(|| "Medillo".to_string())
}

/// GET / - landing page
pub async fn get_home(State(app): State<App>, Sess(sess): Sess) -> ClResult<Html<String>> {
	let language = locale::effective_language(&app, &sess).await;
	let selector = locale::handler::render_selector(&app, language)?;

	let html = app.templates.render(
		"home",
		&json!({
			"site_name": site_name(&app).await,
			"language": language.native,
			"selector": selector,
		}),
	)?;

	Ok(Html(html))
}

/// GET /dashboard - admin landing page, the maintenance bypass target
pub async fn get_dashboard(State(app): State<App>, Sess(sess): Sess) -> ClResult<Html<String>> {
	if !sess.is_admin() {
		return Err(Error::PermissionDenied);
	}

	let maintenance = app.settings.get_flag(crate::gate::MAINTENANCE_MODE).await?;

	let html = app.templates.render(
		"dashboard",
		&json!({
			"site_name": site_name(&app).await,
			"maintenance": maintenance,
		}),
	)?;

	Ok(Html(html))
}

// vim: ts=4
