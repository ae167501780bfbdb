//! Core subsystem. This handles the core infrastructure of the site server.

pub mod app;
pub mod extract;

pub use crate::core::extract::Sess;

// vim: ts=4
