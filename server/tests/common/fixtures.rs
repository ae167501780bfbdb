//! Reusable fixtures and request helpers

use axum::{
	Router,
	body::Body,
	http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use medillo::gate::GatePolicy;
use medillo::settings_adapter::SettingsAdapter;
use medillo::{App, AppBuilder, routes};

use super::adapters::{ADMIN_PASSWORD, ADMIN_USER, MemSettingsAdapter, StaticAuthAdapter};

/// Build an app + router over the given settings store
pub fn test_app_with(
	store: Arc<dyn SettingsAdapter>,
	policy: GatePolicy,
) -> (App, Router) {
	let app = AppBuilder::new()
		.gate_policy(policy)
		.settings_adapter(store)
		.auth_adapter(Arc::new(StaticAuthAdapter))
		.build()
		.expect("Failed to build test app");
	let router = routes::init(app.clone());
	(app, router)
}

/// Build an app + router with the given stored settings
pub fn test_app(values: &[(&str, &str)]) -> (App, Router) {
	test_app_with(Arc::new(MemSettingsAdapter::with(values)), GatePolicy::FailOpen)
}

pub async fn send(router: &Router, req: Request<Body>) -> Response<Body> {
	router.clone().oneshot(req).await.expect("Request failed")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method("GET").uri(uri);
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::empty()).expect("Failed to build request")
}

pub fn post_json(uri: &str, body: &serde_json::Value, cookie: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::from(body.to_string())).expect("Failed to build request")
}

pub fn put_json(uri: &str, body: &serde_json::Value, cookie: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder()
		.method("PUT")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::from(body.to_string())).expect("Failed to build request")
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>, referer: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	if let Some(referer) = referer {
		builder = builder.header(header::REFERER, referer);
	}
	builder.body(Body::from(body.to_string())).expect("Failed to build request")
}

pub async fn body_string(res: Response<Body>) -> String {
	let bytes = res.into_body().collect().await.expect("Failed to read body").to_bytes();
	String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Extract the session cookie pair from a Set-Cookie header
pub fn session_cookie(res: &Response<Body>) -> Option<String> {
	let header = res.headers().get(header::SET_COOKIE)?.to_str().ok()?;
	let pair = header.split(';').next()?;
	pair.starts_with("medillo_sid=").then(|| pair.to_string())
}

/// Log in with the given credentials, returning the session cookie
pub async fn login(router: &Router, user: &str, password: &str) -> String {
	let res = send(
		router,
		post_json("/api/auth/login", &serde_json::json!({ "user": user, "password": password }), None),
	)
	.await;
	assert_eq!(res.status(), StatusCode::OK, "Login should succeed");
	session_cookie(&res).expect("Login response should set the session cookie")
}

/// Log in as the fixture admin
pub async fn login_admin(router: &Router) -> String {
	login(router, ADMIN_USER, ADMIN_PASSWORD).await
}

// vim: ts=4
