//! Settings subsystem.
//!
//! - **Types** (`types.rs`): setting definitions and the boot-time registry
//! - **Service** (`service.rs`): cached access over the injected store handle
//! - **Handler** (`handler.rs`): HTTP admin API
//!
//! Settings are named, persisted scalar strings shared across requests.
//! Definitions are registered while the app is built and then frozen; the
//! service resolves reads as store value, then registry default.

pub mod handler;
pub mod service;
pub mod types;

pub use service::SettingsService;
pub use types::{
	FrozenSettingsRegistry, PermissionLevel, Setting, SettingDefinition, SettingDefinitionBuilder,
	SettingsRegistry,
};

// vim: ts=4
