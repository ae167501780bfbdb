use axum::{extract::FromRequestParts, http::request::Parts};

use crate::prelude::*;
use crate::session::Session;

// Extractors //
//************//

// Sess //
//******//
/// Snapshot of the caller's session, inserted by the session middleware.
///
/// Mutations go through `app.sessions`; the snapshot itself is read-only.
#[derive(Clone, Debug)]
pub struct Sess(pub Session);

impl<S> FromRequestParts<S> for Sess
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(sess) = parts.extensions.get::<Sess>().cloned() {
			Ok(sess)
		} else {
			// Route is missing the session layer
			Err(Error::PermissionDenied)
		}
	}
}

// vim: ts=4
