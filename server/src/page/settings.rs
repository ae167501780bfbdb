//! Page settings registration

use crate::prelude::*;
use crate::settings::{PermissionLevel, SettingDefinition, SettingsRegistry};

/// Register all page settings
pub fn register_settings(registry: &mut SettingsRegistry) -> ClResult<()> {
	registry.register(
		SettingDefinition::builder(super::SITE_NAME)
			.description("Display name shown in page chrome")
			.default("Medillo Health")
			.permission(PermissionLevel::Admin)
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
