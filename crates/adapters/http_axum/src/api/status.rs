//! `GET /api/status`: current alarm and arming status.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::state::AppState;

/// Control-panel summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub alarm_status: AlarmStatus,
    pub alarm_description: String,
    pub arming_status: ArmingStatus,
    pub arming_description: String,
    pub cat_detected: bool,
    pub active_sensors: usize,
}

impl StatusResponse {
    /// Capture the summary from a locked service.
    pub fn capture<R, I>(security: &SecurityService<R, I>) -> Self
    where
        R: SecurityRepository,
        I: ImageService,
    {
        let alarm_status = security.alarm_status();
        let arming_status = security.arming_status();
        Self {
            alarm_status,
            alarm_description: alarm_status.description().to_string(),
            arming_status,
            arming_description: arming_status.description().to_string(),
            cat_detected: security.cat_detected(),
            active_sensors: security.sensors().iter().filter(|s| s.active).count(),
        }
    }
}

/// `GET /api/status`
pub async fn get<R, I>(State(state): State<AppState<R, I>>) -> Json<StatusResponse>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let security = state.security.lock().await;
    Json(StatusResponse::capture(&*security))
}
