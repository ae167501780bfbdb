//! Server-rendered pages.

pub mod handler;
pub mod settings;
pub mod template;

/// Key of the site display name in the settings store
pub const SITE_NAME: &str = "site.name";

// vim: ts=4
