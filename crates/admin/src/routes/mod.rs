//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Shell (HTML, form posts answer 303 See Other -> /)
//! GET  /                       - Login surface or layout, from the current snapshot
//! POST /login                  - Start a session for the submitted role
//! POST /logout                 - End the session
//! POST /navigate               - Switch the active view
//! POST /sidebar                - Open or close the mobile sidebar overlay
//!
//! # API (JSON)
//! GET  /api/shell              - Current snapshot
//! POST /api/shell/events       - Apply a shell event, return the new snapshot
//! ```
//!
//! The active view is never part of a URL; it lives only in the navigator.

pub mod api;
pub mod shell;

use axum::Router;

use crate::state::AppState;

/// Build the shell and API routes.
pub fn routes() -> Router<AppState> {
    Router::new().merge(shell::router()).merge(api::router())
}
