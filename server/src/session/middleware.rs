//! Session cookie middleware.
//!
//! Loads the caller's session from the `medillo_sid` cookie, creating a guest
//! session when none exists, and inserts a snapshot into request extensions
//! for the `Sess` extractor. The cookie is set on the response whenever a
//! session was created.

use axum::{
	body::Body,
	extract::State,
	http::{Request, header},
	middleware::Next,
	response::Response,
};

use crate::core::extract::Sess;
use crate::prelude::*;

pub const SESSION_COOKIE: &str = "medillo_sid";

fn session_id_from_cookies(header: &str) -> Option<&str> {
	header
		.split(';')
		.map(str::trim)
		.find_map(|cookie| cookie.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
}

pub async fn session_layer(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ClResult<Response> {
	let sid = req
		.headers()
		.get(header::COOKIE)
		.and_then(|h| h.to_str().ok())
		.and_then(session_id_from_cookies)
		.map(str::to_owned);

	let (session, created) = match sid.and_then(|sid| app.sessions.load(&sid)) {
		Some(session) => (session, false),
		None => (app.sessions.create(), true),
	};
	let sid = session.sid.clone();

	req.extensions_mut().insert(Sess(session));
	let mut res = next.run(req).await;

	if created {
		let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, sid);
		if let Ok(value) = header::HeaderValue::from_str(&cookie) {
			res.headers_mut().append(header::SET_COOKIE, value);
		}
	}

	Ok(res)
}


// vim: ts=4
