//! # catpoint-domain
//!
//! Pure domain model for the catpoint home security system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Sensors** (door, window, motion) and their activation state
//! - Define the **Arming** and **Alarm** statuses
//! - Define **Images** handed to the cat verdict provider
//! - Define **Events** (notification records broadcast to subscribers)
//! - Contain the **alarm decision rules** as a single pure function
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod alarm;
pub mod event;
pub mod image;
pub mod sensor;
pub mod status;
