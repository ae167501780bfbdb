//! Authentication subsystem.
//!
//! Credential checks live behind the `AuthAdapter` collaborator; this module
//! only promotes or destroys sessions.

pub mod handler;

// vim: ts=4
