//! Page template rendering with Handlebars
//!
//! Templates are embedded at compile time and registered once at startup.
//! Strict mode is on, so every variable a template references must be
//! supplied by the handler.

use handlebars::Handlebars;

use crate::prelude::*;

const TEMPLATES: &[(&str, &str)] = &[
	("maintenance", include_str!("../../templates/maintenance.hbs")),
	("language_selector", include_str!("../../templates/language_selector.hbs")),
	("home", include_str!("../../templates/home.hbs")),
	("dashboard", include_str!("../../templates/dashboard.hbs")),
];

/// Template engine for page rendering
pub struct TemplateEngine {
	handlebars: Handlebars<'static>,
}

impl TemplateEngine {
	pub fn new() -> ClResult<Self> {
		let mut handlebars = Handlebars::new();
		handlebars.set_strict_mode(true);

		for (name, template) in TEMPLATES {
			handlebars.register_template_string(name, template).map_err(|e| {
				Error::ConfigError(format!("Failed to register template '{}': {}", name, e))
			})?;
		}

		Ok(Self { handlebars })
	}

	pub fn render(&self, name: &str, vars: &serde_json::Value) -> ClResult<String> {
		self.handlebars.render(name, vars).map_err(|e| {
			Error::ValidationError(format!("Failed to render template '{}': {}", name, e))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn engine() -> TemplateEngine {
		TemplateEngine::new().unwrap()
	}

	#[test]
	fn test_all_templates_register() {
		let _ = engine();
	}

	#[test]
	fn test_maintenance_notice_without_bypass() {
		let html = engine()
			.render("maintenance", &json!({ "site_name": "Medillo Health", "bypass": false }))
			.unwrap();

		assert!(html.contains("Medillo Health"));
		assert!(html.contains("maintenance"));
		assert!(!html.contains("/dashboard"));
	}

	#[test]
	fn test_maintenance_notice_with_bypass() {
		let html = engine()
			.render("maintenance", &json!({ "site_name": "Medillo Health", "bypass": true }))
			.unwrap();

		assert!(html.contains("href=\"/dashboard\""));
	}

	#[test]
	fn test_site_name_is_escaped() {
		let html = engine()
			.render("maintenance", &json!({ "site_name": "<script>x</script>", "bypass": false }))
			.unwrap();

		assert!(html.contains("&lt;script&gt;"));
		assert!(!html.contains("<script>x"));
	}

	#[test]
	fn test_selector_marks_selected_entry() {
		let html = engine()
			.render(
				"language_selector",
				&json!({
					"current": "es",
					"languages": [
						{ "code": "en", "name": "English", "native": "English", "flag": "🇬🇧", "selected": false },
						{ "code": "es", "name": "Spanish", "native": "Español", "flag": "🇪🇸", "selected": true },
					],
				}),
			)
			.unwrap();

		assert!(html.contains("value=\"es\" selected"));
		assert!(!html.contains("value=\"en\" selected"));
		assert!(html.contains("/api/system/change-language"));
		assert!(html.contains("action=\"/change_language\""));
	}

	#[test]
	fn test_strict_mode_rejects_missing_variable() {
		let res = engine().render("maintenance", &json!({ "bypass": false }));
		assert!(res.is_err());
	}
}

// vim: ts=4
