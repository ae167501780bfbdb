//! Maintenance gate middleware.
//!
//! Runs inside the session layer on every request. Exempt prefixes keep the
//! notice page, the dashboard (admin bypass target), static assets and the
//! API reachable while the site is gated; the settings API is what turns the
//! mode off again.

use axum::{
	body::Body,
	extract::State,
	http::{Request, StatusCode},
	middleware::Next,
	response::{Html, IntoResponse, Response},
};

use crate::core::extract::Sess;
use crate::gate::GatePolicy;
use crate::prelude::*;

const EXEMPT_PREFIXES: &[&str] = &["/maintenance", "/dashboard", "/assets", "/api"];

pub async fn maintenance_gate(
	State(app): State<App>,
	req: Request<Body>,
	next: Next,
) -> ClResult<Response> {
	let path = req.uri().path();
	if EXEMPT_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
		return Ok(next.run(req).await);
	}

	let enabled = match app.settings.get_flag(crate::gate::MAINTENANCE_MODE).await {
		Ok(enabled) => enabled,
		Err(Error::DbError) => match app.opts.gate_policy {
			GatePolicy::FailOpen => {
				warn!("Settings store unreachable, gate policy fail-open");
				false
			}
			GatePolicy::FailClosed => {
				warn!("Settings store unreachable, gate policy fail-closed");
				true
			}
		},
		Err(err) => return Err(err),
	};

	if !enabled {
		return Ok(next.run(req).await);
	}

	let is_admin = req.extensions().get::<Sess>().map(|sess| sess.0.is_admin()).unwrap_or(false);
	debug!("Maintenance gate engaged for {} (admin: {})", path, is_admin);

	// Short-circuit: the notice always renders with HTTP 200, no content
	// negotiation
	let html = super::handler::render_notice(&app, is_admin).await?;
	Ok((StatusCode::OK, Html(html)).into_response())
}

// vim: ts=4
