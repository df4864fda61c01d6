//! Middleware for admin.

pub mod session;

pub use session::create_session_layer;
