//! API route handlers for admin.
//!
//! JSON access to the same per-session navigator the HTML shell drives.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_sessions::Session;
use tracing::instrument;

use easy_cebu_core::{ShellEvent, ShellSnapshot};

use crate::error::AppError;
use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/shell", get(snapshot))
        .route("/api/shell/events", post(apply_event))
}

/// Current shell snapshot.
///
/// GET /api/shell
#[instrument(skip(state, session))]
async fn snapshot(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<ShellSnapshot>, AppError> {
    Ok(Json(state.snapshot(&session).await?))
}

/// Apply one shell event.
///
/// POST /api/shell/events
#[instrument(skip(state, session))]
async fn apply_event(
    State(state): State<AppState>,
    session: Session,
    Json(event): Json<ShellEvent>,
) -> Result<Json<ShellSnapshot>, AppError> {
    let (_, snapshot) = state.dispatch(&session, event).await?;
    Ok(Json(snapshot))
}
