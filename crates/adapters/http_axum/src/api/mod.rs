//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod arming;
#[allow(clippy::missing_errors_doc)]
pub mod images;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;
pub mod sse;
pub mod status;

use axum::Router;
use axum::routing::{get, post, put};

use catpoint_app::ports::{ImageService, SecurityRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, I>() -> Router<AppState<R, I>>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    Router::new()
        .route("/status", get(status::get::<R, I>))
        .route("/arming", put(arming::set::<R, I>))
        .route(
            "/sensors",
            get(sensors::list::<R, I>).post(sensors::create::<R, I>),
        )
        .route(
            "/sensors/{id}",
            get(sensors::get::<R, I>).delete(sensors::delete::<R, I>),
        )
        .route("/sensors/{id}/active", put(sensors::set_active::<R, I>))
        .route("/images", post(images::process::<R, I>))
        .route("/events/stream", get(sse::stream::<R, I>))
}
