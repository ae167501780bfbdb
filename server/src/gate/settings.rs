//! Gate settings registration

use crate::prelude::*;
use crate::settings::{PermissionLevel, SettingDefinition, SettingsRegistry};

/// Register all gate settings
pub fn register_settings(registry: &mut SettingsRegistry) -> ClResult<()> {
	// Maintenance mode flag: only the literal "1" enables it
	registry.register(
		SettingDefinition::builder(super::MAINTENANCE_MODE)
			.description("Serve the maintenance notice instead of site pages")
			.default("0")
			.permission(PermissionLevel::Admin)
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
