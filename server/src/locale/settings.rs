//! Locale settings registration

use crate::prelude::*;
use crate::settings::{PermissionLevel, SettingDefinition, SettingsRegistry};

use super::catalog;

/// Register all locale settings
pub fn register_settings(registry: &mut SettingsRegistry) -> ClResult<()> {
	registry.register(
		SettingDefinition::builder(super::DEFAULT_LANGUAGE)
			.description("Language used for sessions without a selection")
			.default("en")
			.permission(PermissionLevel::Admin)
			.validator(|value| match catalog::find(value) {
				Some(_) => Ok(()),
				None => Err(Error::ValidationError(format!(
					"Language '{}' is not in the catalog",
					value
				))),
			})
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
