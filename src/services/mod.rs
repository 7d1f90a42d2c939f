//! Business logic services.

pub mod upload;

pub use upload::configure_routes as configure_upload_routes;
