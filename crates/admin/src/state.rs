//! Application state shared across handlers.

use std::sync::Arc;

use tower_sessions::Session;

use easy_cebu_core::{Navigator, ShellEvent, ShellSnapshot, Transition};

use crate::config::AdminConfig;
use crate::error::AppError;
use crate::shell::ShellRenderer;
use crate::views::ViewRegistry;

/// Session key holding the client's navigator.
pub const NAVIGATOR_KEY: &str = "shell.navigator";

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds what every client
/// shares (configuration and view collaborators); each client's
/// [`Navigator`] lives in its own session and is only changed through
/// [`AppState::dispatch`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    views: ViewRegistry,
}

impl AppState {
    /// Create application state with the standard view collaborators.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self::with_views(config, ViewRegistry::standard())
    }

    /// Create application state with a custom view registry.
    #[must_use]
    pub fn with_views(config: AdminConfig, views: ViewRegistry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, views }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Renderer bound to this state's views and store name.
    #[must_use]
    pub fn renderer(&self) -> ShellRenderer<'_> {
        ShellRenderer::new(&self.inner.views, &self.inner.config.store_name)
    }

    /// Current shell snapshot for the client owning `session`.
    ///
    /// A session without a stored navigator is logged out.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn snapshot(&self, session: &Session) -> Result<ShellSnapshot, AppError> {
        Ok(load_navigator(session).await?.snapshot())
    }

    /// Apply one event to the client's navigator and return what happened
    /// along with the new snapshot.
    ///
    /// Logging in issues a fresh session id; logging out drops the session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn dispatch(
        &self,
        session: &Session,
        event: ShellEvent,
    ) -> Result<(Transition, ShellSnapshot), AppError> {
        let mut navigator = load_navigator(session).await?;
        let transition = navigator.apply(event);
        let snapshot = navigator.snapshot();

        match transition {
            Transition::Ignored => {}
            Transition::LoggedOut => session.flush().await?,
            Transition::LoggedIn { .. } => {
                session.cycle_id().await?;
                session.insert(NAVIGATOR_KEY, &navigator).await?;
            }
            Transition::Navigated | Transition::Redirected | Transition::SidebarToggled { .. } => {
                session.insert(NAVIGATOR_KEY, &navigator).await?;
            }
        }

        tracing::debug!(
            authenticated = snapshot.authenticated,
            active_view = snapshot.active_view.as_ref().map(|v| v.as_str()),
            sidebar_open = snapshot.sidebar_open,
            "Shell state updated"
        );

        Ok((transition, snapshot))
    }
}

async fn load_navigator(session: &Session) -> Result<Navigator, AppError> {
    Ok(session
        .get::<Navigator>(NAVIGATOR_KEY)
        .await?
        .unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use easy_cebu_core::{KnownView, Role, ViewId};
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::views::PanelView;

    fn state() -> AppState {
        AppState::new(AdminConfig::default())
    }

    fn session(store: &Arc<MemoryStore>) -> Session {
        Session::new(None, Arc::clone(store), None)
    }

    #[tokio::test]
    async fn test_new_session_is_logged_out() {
        let store = Arc::new(MemoryStore::default());
        let snapshot = state().snapshot(&session(&store)).await.unwrap();
        assert!(!snapshot.authenticated);
        assert_eq!(snapshot.active_view, None);
    }

    #[tokio::test]
    async fn test_dispatch_returns_new_snapshot() {
        let store = Arc::new(MemoryStore::default());
        let session = session(&store);
        let state = state();
        state
            .dispatch(&session, ShellEvent::Login { role: Role::Staff })
            .await
            .unwrap();

        let (transition, snapshot) = state
            .dispatch(
                &session,
                ShellEvent::Navigate {
                    view: ViewId::from("settings"),
                },
            )
            .await
            .unwrap();

        assert_eq!(transition, Transition::Redirected);
        assert_eq!(snapshot.active_view, Some(ViewId::HOME));
        assert_eq!(state.snapshot(&session).await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_navigators() {
        let store = Arc::new(MemoryStore::default());
        let (alice, bob) = (session(&store), session(&store));
        let state = state();

        state
            .dispatch(&alice, ShellEvent::Login { role: Role::Staff })
            .await
            .unwrap();
        assert!(!state.snapshot(&bob).await.unwrap().authenticated);

        let (transition, _) = state.dispatch(&bob, ShellEvent::Logout).await.unwrap();
        assert_eq!(transition, Transition::Ignored);
        assert!(state.snapshot(&alice).await.unwrap().authenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let store = Arc::new(MemoryStore::default());
        let session = session(&store);
        let state = state();

        state
            .dispatch(&session, ShellEvent::Login { role: Role::Admin })
            .await
            .unwrap();
        state
            .dispatch(&session, ShellEvent::ToggleSidebar { open: true })
            .await
            .unwrap();
        state.dispatch(&session, ShellEvent::Logout).await.unwrap();

        assert!(session.get::<Navigator>(NAVIGATOR_KEY).await.unwrap().is_none());
        assert!(!state.snapshot(&session).await.unwrap().authenticated);
    }

    #[tokio::test]
    async fn test_renderer_uses_configured_store_name() {
        let config = AdminConfig {
            store_name: "Cebu North".to_string(),
            ..AdminConfig::default()
        };
        let state = AppState::new(config);
        let store = Arc::new(MemoryStore::default());
        let snapshot = state.snapshot(&session(&store)).await.unwrap();
        let html = state.renderer().render(&snapshot).unwrap();
        assert!(html.contains("Cebu North"));
    }

    #[tokio::test]
    async fn test_unregistered_known_view_renders_placeholder() {
        let mut views = ViewRegistry::new();
        views.register(
            KnownView::Orders,
            PanelView::new(KnownView::Orders, "Orders go here."),
        );
        let state = AppState::with_views(AdminConfig::default(), views);

        let store = Arc::new(MemoryStore::default());
        let session = session(&store);
        state
            .dispatch(&session, ShellEvent::Login { role: Role::Admin })
            .await
            .unwrap();

        let orders = state
            .dispatch(
                &session,
                ShellEvent::Navigate {
                    view: ViewId::from("orders"),
                },
            )
            .await
            .unwrap()
            .1;
        let html = state.renderer().render(&orders).unwrap();
        assert!(html.contains("Orders go here."));

        let (_, products) = state
            .dispatch(
                &session,
                ShellEvent::Navigate {
                    view: ViewId::from("products"),
                },
            )
            .await
            .unwrap();
        let html = state.renderer().render(&products).unwrap();
        assert!(html.contains("View not implemented: products"));
    }
}
