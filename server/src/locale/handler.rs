//! Language selection handlers
//!
//! Two write paths carry the same payload: the JSON endpoint used by the
//! selector script, and a plain form POST the client falls back to when the
//! script path fails. The server is the authority on catalog membership.

use axum::{
	Form, Json,
	extract::State,
	http::{HeaderMap, StatusCode, header},
	response::{Html, Redirect},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::extract::Sess;
use crate::locale::{self, CATALOG, LanguageEntry, catalog};
use crate::prelude::*;

#[derive(Deserialize)]
pub struct ChangeLanguageReq {
	pub language: String,
}

#[derive(Serialize)]
pub struct ChangeLanguageRes {
	pub success: bool,
}

/// POST /api/system/change-language - set the session language
///
/// Unknown codes are rejected and the previous selection is kept. Treated as
/// a public action; no role check.
pub async fn post_change_language(
	State(app): State<App>,
	Sess(sess): Sess,
	Json(req): Json<ChangeLanguageReq>,
) -> ClResult<(StatusCode, Json<ChangeLanguageRes>)> {
	if catalog::find(&req.language).is_none() {
		debug!("Rejected language change to unknown code '{}'", req.language);
		return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(ChangeLanguageRes { success: false })));
	}

	app.sessions.set_language(&sess.sid, &req.language);
	info!("Session {} switched language to {}", sess.sid, req.language);

	Ok((StatusCode::OK, Json(ChangeLanguageRes { success: true })))
}

/// POST /change_language - scriptless form fallback
///
/// Same payload and validation as the JSON endpoint, then a redirect back to
/// the referring page so the change takes effect without client scripting.
pub async fn post_change_language_form(
	State(app): State<App>,
	Sess(sess): Sess,
	headers: HeaderMap,
	Form(req): Form<ChangeLanguageReq>,
) -> ClResult<Redirect> {
	if catalog::find(&req.language).is_some() {
		app.sessions.set_language(&sess.sid, &req.language);
		info!("Session {} switched language to {} (form)", sess.sid, req.language);
	} else {
		debug!("Rejected language change to unknown code '{}' (form)", req.language);
	}

	let back = headers.get(header::REFERER).and_then(|h| h.to_str().ok()).unwrap_or("/");
	Ok(Redirect::to(back))
}

/// GET /partial/language-selector - server-rendered dropdown fragment
pub async fn get_language_selector(
	State(app): State<App>,
	Sess(sess): Sess,
) -> ClResult<Html<String>> {
	let current = locale::effective_language(&app, &sess).await;
	Ok(Html(render_selector(&app, current)?))
}

/// Render the selector fragment with `current` marked as selected
pub fn render_selector(app: &App, current: &LanguageEntry) -> ClResult<String> {
	let languages: Vec<_> = CATALOG
		.iter()
		.map(|entry| {
			json!({
				"code": entry.code,
				"name": entry.name,
				"native": entry.native,
				"flag": entry.flag,
				"selected": entry.code == current.code,
			})
		})
		.collect();

	app.templates
		.render("language_selector", &json!({ "languages": languages, "current": current.code }))
}

// vim: ts=4
