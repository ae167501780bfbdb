//! Locale subsystem.
//!
//! The language catalog is static reference data; the effective language for
//! a request is always a catalog member. The selection lives in the session
//! and is written through the change-language endpoints.

pub mod catalog;
pub mod handler;
pub mod settings;

pub use catalog::{CATALOG, LanguageEntry};

use crate::prelude::*;
use crate::session::Session;

/// Key of the site-wide default language in the settings store
pub const DEFAULT_LANGUAGE: &str = "site.default_language";

/// Resolve the effective language for a request: the session's selection if
/// it is a catalog member, else the configured site default, else the first
/// catalog entry. Store failures degrade to the fallback chain.
pub async fn effective_language(app: &App, sess: &Session) -> &'static LanguageEntry {
	if let Some(entry) = sess.language.as_deref().and_then(catalog::find) {
		return entry;
	}

	if let Some(code) = app.settings.get_or_default(DEFAULT_LANGUAGE).await {
		if let Some(entry) = catalog::find(&code) {
			return entry;
		}
		warn!("Configured default language '{}' is not in the catalog", code);
	}

	&CATALOG[0]
}

// vim: ts=4
