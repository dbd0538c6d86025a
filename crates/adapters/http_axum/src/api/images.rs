//! `POST /api/images`: classify a camera image.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_domain::image::Image;
use catpoint_domain::status::AlarmStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// Verdict and resulting alarm status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessImageResponse {
    pub cat_detected: bool,
    pub alarm_status: AlarmStatus,
}

/// `POST /api/images`: the request body is the raw encoded image.
pub async fn process<R, I>(
    State(state): State<AppState<R, I>>,
    body: Bytes,
) -> Result<Json<ProcessImageResponse>, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let image = Image::from_bytes(body.to_vec())?;
    let mut security = state.security.lock().await;
    let cat_detected = security.process_image(&image);
    Ok(Json(ProcessImageResponse {
        cat_detected,
        alarm_status: security.alarm_status(),
    }))
}
