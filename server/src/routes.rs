use axum::{
	Router, middleware,
	routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::core::app::App;
use crate::gate::middleware::maintenance_gate;
use crate::session::middleware::session_layer;
use crate::{auth, gate, locale, page, settings};

pub fn init(app: App) -> Router {
	let page_router = Router::new()
		.route("/", get(page::handler::get_home))
		.route("/dashboard", get(page::handler::get_dashboard))
		.route("/maintenance", get(gate::handler::get_maintenance))
		.route("/partial/language-selector", get(locale::handler::get_language_selector))
		.route("/change_language", post(locale::handler::post_change_language_form));

	let api_router = Router::new()
		.route("/api/system/change-language", post(locale::handler::post_change_language))
		.route("/api/auth/login", post(auth::handler::post_login))
		.route("/api/auth/logout", post(auth::handler::post_logout))
		.route("/api/settings", get(settings::handler::list_settings))
		.route(
			"/api/settings/{key}",
			get(settings::handler::get_setting).put(settings::handler::update_setting),
		);

	// Layer order: tracing wraps the session layer, which wraps the gate, so
	// the gate always sees the caller's session
	Router::new()
		.merge(page_router)
		.merge(api_router)
		.nest_service("/assets", ServeDir::new(app.opts.dist_dir.to_path_buf()))
		.layer(middleware::from_fn_with_state(app.clone(), maintenance_gate))
		.layer(middleware::from_fn_with_state(app.clone(), session_layer))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
