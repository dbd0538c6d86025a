//! `PUT /api/arming`: arm or disarm the system.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_domain::status::ArmingStatus;

use crate::api::status::StatusResponse;
use crate::state::AppState;

/// Request body for changing the arming status.
#[derive(Deserialize)]
pub struct SetArmingRequest {
    pub status: ArmingStatus,
}

/// `PUT /api/arming`
pub async fn set<R, I>(
    State(state): State<AppState<R, I>>,
    Json(req): Json<SetArmingRequest>,
) -> Json<StatusResponse>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let mut security = state.security.lock().await;
    security.set_arming_status(req.status);
    Json(StatusResponse::capture(&*security))
}
