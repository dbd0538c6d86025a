//! # catpoint-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON control-panel API** (`/api/status`, `/api/arming`,
//!   `/api/sensors`, `/api/images`)
//! - Stream security events to clients over **Server-Sent Events**
//!   (`/api/events/stream`)
//! - Map HTTP requests into security service calls (driving adapter)
//! - Map domain errors into HTTP status codes
//!
//! ## Concurrency
//! The security service sits behind a `tokio::sync::Mutex`; each request holds
//! the lock for its whole read-decide-write-notify sequence.
//!
//! ## Dependency rule
//! Depends on `catpoint-app` (for port traits and services) and `catpoint-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
