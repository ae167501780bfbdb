//! Login/logout handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::extract::Sess;
use crate::prelude::*;

/// # POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginReq {
	pub user: String,
	pub password: String,
}

#[derive(Serialize)]
pub struct LoginRes {
	pub success: bool,
	pub role: Role,
}

pub async fn post_login(
	State(app): State<App>,
	Sess(sess): Sess,
	Json(login): Json<LoginReq>,
) -> ClResult<(StatusCode, Json<LoginRes>)> {
	let role = app.auth_adapter.verify_credentials(&login.user, &login.password).await?;

	match role {
		Some(role) => {
			app.sessions.set_role(&sess.sid, role);
			info!("Session {} logged in as {} ({:?})", sess.sid, login.user, role);
			Ok((StatusCode::OK, Json(LoginRes { success: true, role })))
		}
		None => {
			warn!("Failed login attempt for {}", login.user);
			tokio::time::sleep(std::time::Duration::from_secs(1)).await;
			Err(Error::PermissionDenied)
		}
	}
}

/// # POST /api/auth/logout
#[derive(Serialize)]
pub struct LogoutRes {
	pub success: bool,
}

pub async fn post_logout(
	State(app): State<App>,
	Sess(sess): Sess,
) -> ClResult<(StatusCode, Json<LogoutRes>)> {
	app.sessions.destroy(&sess.sid);
	info!("Session {} logged out", sess.sid);

	Ok((StatusCode::OK, Json(LogoutRes { success: true })))
}

// vim: ts=4
