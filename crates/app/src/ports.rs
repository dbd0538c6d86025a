//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! All ports are synchronous: a security operation runs read-decide-write-notify
//! to completion without suspending.

pub mod image;
pub mod listener;
pub mod repository;

pub use image::ImageService;
pub use listener::StatusListener;
pub use repository::SecurityRepository;
