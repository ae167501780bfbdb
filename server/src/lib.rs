//! Medillo is the server-rendered management site for the Medillo health system.
//!
//! This crate carries the site's runtime mode machinery:
//!
//! - A shared key-value **settings store** (trait + injected adapter) with a
//!   registry of known settings, permission checks and a read cache
//! - The **settings gate**: a maintenance-mode check consulted on every page
//!   request, with an explicit failure policy and an admin bypass
//! - The **locale selector**: a session-scoped language with a static
//!   catalog, a JSON change endpoint and a scriptless form fallback
//! - Cookie-correlated **sessions** holding the caller's role and language

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod auth;
pub mod gate;
pub mod locale;
pub mod page;
pub mod session;
pub mod settings;
pub mod auth_adapter;
pub mod settings_adapter;
pub mod prelude;
pub mod types;
pub mod routes;

pub use crate::core::app::{App, AppBuilder, AppState};
pub use crate::core::extract::Sess;

// vim: ts=4
