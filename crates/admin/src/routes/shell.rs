//! Shell route handlers.
//!
//! Every control in the rendered shell is a small form posting to one of
//! these handlers. Each handler applies exactly one operation to the
//! client's own navigator and redirects back to `/`, where the page is
//! re-rendered from the snapshot.

use axum::{
    Form, Router,
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use easy_cebu_core::{Role, ShellEvent, ViewId};

use crate::error::AppError;
use crate::state::AppState;

/// Login form submission.
///
/// Credentials are required by the form but never verified; only the role
/// is used.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    role: Role,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Sidebar link or in-view shortcut.
#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    view: String,
}

/// Sidebar toggle or backdrop tap.
#[derive(Debug, Deserialize)]
pub struct SidebarForm {
    open: bool,
}

/// Build the shell router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/navigate", post(navigate))
        .route("/sidebar", post(toggle_sidebar))
}

/// Render the shell for the current snapshot.
///
/// GET /
#[instrument(skip(state, session))]
async fn index(State(state): State<AppState>, session: Session) -> Result<Html<String>, AppError> {
    let snapshot = state.snapshot(&session).await?;
    Ok(Html(state.renderer().render(&snapshot)?))
}

/// Start a session.
///
/// POST /login
#[instrument(skip(state, session, form), fields(role = %form.role))]
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    if form.username.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    state
        .dispatch(&session, ShellEvent::Login { role: form.role })
        .await?;
    tracing::info!("Session started");
    Ok(Redirect::to("/"))
}

/// End the session.
///
/// POST /logout
#[instrument(skip(state, session))]
async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect, AppError> {
    state.dispatch(&session, ShellEvent::Logout).await?;
    Ok(Redirect::to("/"))
}

/// Switch the active view.
///
/// POST /navigate
#[instrument(skip(state, session))]
async fn navigate(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NavigateForm>,
) -> Result<Redirect, AppError> {
    let event = ShellEvent::Navigate {
        view: ViewId::from(form.view),
    };
    state.dispatch(&session, event).await?;
    Ok(Redirect::to("/"))
}

/// Open or close the sidebar overlay.
///
/// POST /sidebar
#[instrument(skip(state, session))]
async fn toggle_sidebar(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SidebarForm>,
) -> Result<Redirect, AppError> {
    state
        .dispatch(&session, ShellEvent::ToggleSidebar { open: form.open })
        .await?;
    Ok(Redirect::to("/"))
}
