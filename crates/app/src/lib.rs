//! # catpoint-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecurityRepository`: alarm status, arming status, and the sensor set
//!   - `ImageService`: cat verdict for a camera image
//!   - `StatusListener`: push notifications of status changes
//! - Define the **driving/inbound** use-case struct:
//!   - `SecurityService`: sensor activation, arming, image processing, sensor lifecycle
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `catpoint-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
