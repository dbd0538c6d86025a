//! JSON REST handlers for sensors.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_domain::id::SensorId;
use catpoint_domain::sensor::{Sensor, SensorType};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a sensor.
#[derive(Deserialize)]
pub struct CreateSensorRequest {
    pub name: String,
    pub sensor_type: SensorType,
}

/// Request body for reporting a sensor's activation.
#[derive(Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Sensor>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/sensors`
pub async fn list<R, I>(State(state): State<AppState<R, I>>) -> Json<Vec<Sensor>>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let security = state.security.lock().await;
    Json(security.sensors())
}

/// `GET /api/sensors/:id`
pub async fn get<R, I>(
    State(state): State<AppState<R, I>>,
    Path(id): Path<String>,
) -> Result<Json<Sensor>, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let sensor_id = SensorId::parse(&id)?;
    let security = state.security.lock().await;
    Ok(Json(security.sensor(sensor_id)?))
}

/// `POST /api/sensors`
pub async fn create<R, I>(
    State(state): State<AppState<R, I>>,
    Json(req): Json<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let sensor = Sensor::builder()
        .name(req.name)
        .sensor_type(req.sensor_type)
        .build()?;
    let mut security = state.security.lock().await;
    security.add_sensor(sensor.clone())?;
    Ok(CreateResponse::Created(Json(sensor)))
}

/// `DELETE /api/sensors/:id`: succeeds whether or not the sensor existed.
pub async fn delete<R, I>(
    State(state): State<AppState<R, I>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let sensor_id = SensorId::parse(&id)?;
    state.security.lock().await.remove_sensor(sensor_id);
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/sensors/:id/active`
pub async fn set_active<R, I>(
    State(state): State<AppState<R, I>>,
    Path(id): Path<String>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<Sensor>, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let sensor_id = SensorId::parse(&id)?;
    let mut security = state.security.lock().await;
    let sensor = security.change_sensor_activation_status(sensor_id, req.active)?;
    Ok(Json(sensor))
}
