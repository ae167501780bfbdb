//! Maintenance gate integration tests

use axum::http::StatusCode;
use std::sync::Arc;

use medillo::gate::GatePolicy;

mod common;

use common::adapters::{FailingSettingsAdapter, STAFF_PASSWORD, STAFF_USER};
use common::fixtures::{body_string, get, login, login_admin, send, test_app, test_app_with};

#[tokio::test]
async fn test_disabled_serves_pages() {
	let (_app, router) = test_app(&[]);

	let res = send(&router, get("/", None)).await;
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("id=\"home\""));
}

#[tokio::test]
async fn test_only_literal_one_enables_the_gate() {
	// Anything but the literal "1" reads as "site is up"
	for raw in ["0", "true", "TRUE", "yes", "on", "2", ""] {
		let (_app, router) = test_app(&[("site.maintenance_mode", raw)]);

		let res = send(&router, get("/", None)).await;
		let body = body_string(res).await;
		assert!(body.contains("id=\"home\""), "value '{}' must not gate the site", raw);
	}
}

#[tokio::test]
async fn test_enabled_gates_guests_without_bypass() {
	let (_app, router) = test_app(&[("site.maintenance_mode", "1")]);

	let res = send(&router, get("/", None)).await;
	// The notice renders with plain 200, no content negotiation
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("under maintenance"));
	assert!(!body.contains("/dashboard"));
}

#[tokio::test]
async fn test_enabled_admin_sees_bypass_link() {
	let (_app, router) = test_app(&[("site.maintenance_mode", "1")]);

	let cookie = login_admin(&router).await;
	let res = send(&router, get("/", Some(&cookie))).await;
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("under maintenance"));
	assert!(body.contains("href=\"/dashboard\""));
}

#[tokio::test]
async fn test_enabled_staff_is_gated_without_bypass() {
	let (_app, router) = test_app(&[("site.maintenance_mode", "1")]);

	let cookie = login(&router, STAFF_USER, STAFF_PASSWORD).await;
	let res = send(&router, get("/", Some(&cookie))).await;

	let body = body_string(res).await;
	assert!(body.contains("under maintenance"));
	assert!(!body.contains("/dashboard"));
}

#[tokio::test]
async fn test_dashboard_is_exempt_for_admins() {
	let (_app, router) = test_app(&[("site.maintenance_mode", "1")]);

	let cookie = login_admin(&router).await;
	let res = send(&router, get("/dashboard", Some(&cookie))).await;
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("id=\"dashboard\""));
	assert!(body.contains("enabled"));
}

#[tokio::test]
async fn test_dashboard_requires_admin() {
	let (_app, router) = test_app(&[]);

	let res = send(&router, get("/dashboard", None)).await;
	assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_notice_page_renders_while_site_is_up() {
	let (_app, router) = test_app(&[]);

	let res = send(&router, get("/maintenance", None)).await;
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("under maintenance"));
}

#[tokio::test]
async fn test_store_failure_fail_open() {
	let (_app, router) = test_app_with(Arc::new(FailingSettingsAdapter), GatePolicy::FailOpen);

	let res = send(&router, get("/", None)).await;
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("id=\"home\""));
}

#[tokio::test]
async fn test_store_failure_fail_closed() {
	let (_app, router) = test_app_with(Arc::new(FailingSettingsAdapter), GatePolicy::FailClosed);

	let res = send(&router, get("/", None)).await;
	assert_eq!(res.status(), StatusCode::OK);

	let body = body_string(res).await;
	assert!(body.contains("under maintenance"));
}
