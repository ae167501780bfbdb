//! App state type

use std::{
	path::{Path, PathBuf},
	sync::Arc,
	time::Duration,
};

use crate::prelude::*;

use crate::auth_adapter::AuthAdapter;
use crate::gate::GatePolicy;
use crate::page::template::TemplateEngine;
use crate::session::SessionStore;
use crate::settings::{SettingsRegistry, SettingsService};
use crate::settings_adapter::SettingsAdapter;
use crate::{gate, locale, page, routes, session};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub settings: SettingsService,
	pub sessions: SessionStore,
	pub templates: TemplateEngine,

	pub auth_adapter: Arc<dyn AuthAdapter>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub settings_adapter: Option<Arc<dyn SettingsAdapter>>,
	pub auth_adapter: Option<Arc<dyn AuthAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub dist_dir: Box<Path>,
	pub gate_policy: GatePolicy,
	pub session_ttl: Duration,
	pub settings_cache_size: usize,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				dist_dir: PathBuf::from("./dist").into(),
				gate_policy: GatePolicy::FailOpen,
				session_ttl: Duration::from_secs(8 * 3600),
				settings_cache_size: 100,
			},
			adapters: Adapters { settings_adapter: None, auth_adapter: None },
		}
	}

	// Opts
	pub fn listen(mut self, listen: impl Into<Box<str>>) -> Self { self.opts.listen = listen.into(); self }
	pub fn dist_dir(mut self, dist_dir: impl Into<Box<Path>>) -> Self { self.opts.dist_dir = dist_dir.into(); self }
	pub fn gate_policy(mut self, gate_policy: GatePolicy) -> Self { self.opts.gate_policy = gate_policy; self }
	pub fn session_ttl(mut self, session_ttl: Duration) -> Self { self.opts.session_ttl = session_ttl; self }
	pub fn settings_cache_size(mut self, size: usize) -> Self { self.opts.settings_cache_size = size; self }

	// Adapters
	pub fn settings_adapter(mut self, settings_adapter: Arc<dyn SettingsAdapter>) -> Self {
		self.adapters.settings_adapter = Some(settings_adapter);
		self
	}
	pub fn auth_adapter(mut self, auth_adapter: Arc<dyn AuthAdapter>) -> Self {
		self.adapters.auth_adapter = Some(auth_adapter);
		self
	}

	/// Build the app state without serving (used directly by tests)
	pub fn build(self) -> ClResult<App> {
		let settings_adapter = self
			.adapters
			.settings_adapter
			.ok_or_else(|| Error::ConfigError("No settings adapter configured".into()))?;
		let auth_adapter = self
			.adapters
			.auth_adapter
			.ok_or_else(|| Error::ConfigError("No auth adapter configured".into()))?;

		// Register module settings and freeze the registry
		let mut registry = SettingsRegistry::new();
		gate::settings::register_settings(&mut registry)?;
		locale::settings::register_settings(&mut registry)?;
		page::settings::register_settings(&mut registry)?;
		let registry = Arc::new(registry.freeze());

		let settings =
			SettingsService::new(registry, settings_adapter, self.opts.settings_cache_size);
		let sessions = SessionStore::new(self.opts.session_ttl);
		let templates = TemplateEngine::new()?;

		Ok(Arc::new(AppState { opts: self.opts, settings, sessions, templates, auth_adapter }))
	}

	pub async fn run(self) -> ClResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();

		let app = self.build()?;
		info!("Medillo site server v{}", VERSION);
		info!("Gate policy: {:?}", app.opts.gate_policy);

		session::start_sweeper(&app);
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
