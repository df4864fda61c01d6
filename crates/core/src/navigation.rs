//! Session and navigation state machine.
//!
//! # States
//!
//! ```text
//!              login(role)
//!   LoggedOut ─────────────► LoggedIn { session, navigation }
//!       ▲                        │  ▲
//!       │        logout()        │  │ navigate(view)
//!       └────────────────────────┘  │ toggle_sidebar(open)
//!                                   └─┘  login(role)
//! ```
//!
//! Every operation is a single state replacement. Calls that are not valid
//! in the current state (navigating while logged out, logging out twice)
//! leave the state untouched and report [`Transition::Ignored`].

use serde::{Deserialize, Serialize};

use crate::policy;
use crate::types::{Role, ViewId};

/// A signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub role: Role,
}

impl Session {
    const fn new(role: Role) -> Self {
        Self {
            authenticated: true,
            role,
        }
    }
}

/// Where the signed-in user is within the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_view: ViewId,
    /// Mobile overlay visibility; meaningless on wide layouts.
    pub sidebar_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_view: ViewId::HOME,
            sidebar_open: false,
        }
    }
}

/// The controller's full state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShellState {
    #[default]
    LoggedOut,
    LoggedIn {
        session: Session,
        navigation: NavigationState,
    },
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A session was established (or replaced) with this role.
    LoggedIn { role: Role },
    /// The session was torn down.
    LoggedOut,
    /// The requested view became active.
    Navigated,
    /// The requested view is admin-only; home became active instead.
    Redirected,
    /// The sidebar overlay was set to `open`.
    SidebarToggled { open: bool },
    /// The call is not valid while logged out; nothing changed.
    Ignored,
}

/// An inbound UI event, as delivered by the shell renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    Login { role: Role },
    Logout,
    Navigate { view: ViewId },
    ToggleSidebar { open: bool },
}

/// Read-only view of the controller handed to renderers after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub active_view: Option<ViewId>,
    pub sidebar_open: bool,
}

/// Owns the shell state and applies transitions to it.
///
/// # Example
///
/// ```
/// use easy_cebu_core::{KnownView, Navigator, Role, ViewId};
///
/// let mut nav = Navigator::new();
/// nav.login(Role::Staff);
/// nav.navigate(ViewId::from("analytics"));
///
/// let snapshot = nav.snapshot();
/// assert_eq!(snapshot.active_view, Some(ViewId::Known(KnownView::Home)));
/// ```
///
/// Serializes as its [`ShellState`], so a navigator can be parked in a
/// per-client session store between requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Navigator {
    state: ShellState,
}

impl Navigator {
    /// Create a logged-out navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `role` on the home view with the sidebar closed.
    ///
    /// Replaces any existing session.
    pub fn login(&mut self, role: Role) -> Transition {
        self.state = ShellState::LoggedIn {
            session: Session::new(role),
            navigation: NavigationState::default(),
        };
        Transition::LoggedIn { role }
    }

    /// End the session, discarding the navigation state.
    pub fn logout(&mut self) -> Transition {
        match self.state {
            ShellState::LoggedOut => Transition::Ignored,
            ShellState::LoggedIn { .. } => {
                self.state = ShellState::LoggedOut;
                Transition::LoggedOut
            }
        }
    }

    /// Make `view` active, or home if the session's role is barred from it.
    ///
    /// Always closes the sidebar overlay.
    pub fn navigate(&mut self, view: ViewId) -> Transition {
        let ShellState::LoggedIn {
            session,
            navigation,
        } = &mut self.state
        else {
            return Transition::Ignored;
        };

        let (active_view, transition) = if policy::is_restricted(&view, session.role) {
            (ViewId::HOME, Transition::Redirected)
        } else {
            (view, Transition::Navigated)
        };

        *navigation = NavigationState {
            active_view,
            sidebar_open: false,
        };
        transition
    }

    /// Show or hide the sidebar overlay without changing the active view.
    pub fn toggle_sidebar(&mut self, open: bool) -> Transition {
        match &mut self.state {
            ShellState::LoggedOut => Transition::Ignored,
            ShellState::LoggedIn { navigation, .. } => {
                navigation.sidebar_open = open;
                Transition::SidebarToggled { open }
            }
        }
    }

    /// Dispatch an inbound event to the matching operation.
    pub fn apply(&mut self, event: ShellEvent) -> Transition {
        match event {
            ShellEvent::Login { role } => self.login(role),
            ShellEvent::Logout => self.logout(),
            ShellEvent::Navigate { view } => self.navigate(view),
            ShellEvent::ToggleSidebar { open } => self.toggle_sidebar(open),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    /// Active view of the current session, if any.
    #[must_use]
    pub const fn active_view(&self) -> Option<&ViewId> {
        match &self.state {
            ShellState::LoggedOut => None,
            ShellState::LoggedIn { navigation, .. } => Some(&navigation.active_view),
        }
    }

    /// Snapshot of the state for renderers.
    #[must_use]
    pub fn snapshot(&self) -> ShellSnapshot {
        match &self.state {
            ShellState::LoggedOut => ShellSnapshot {
                authenticated: false,
                role: None,
                active_view: None,
                sidebar_open: false,
            },
            ShellState::LoggedIn {
                session,
                navigation,
            } => ShellSnapshot {
                authenticated: session.authenticated,
                role: Some(session.role),
                active_view: Some(navigation.active_view.clone()),
                sidebar_open: navigation.sidebar_open,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::policy::ADMIN_ONLY_VIEWS;
    use crate::types::KnownView;

    fn logged_in(role: Role) -> Navigator {
        let mut nav = Navigator::new();
        nav.login(role);
        nav
    }

    #[test]
    fn test_starts_logged_out() {
        let nav = Navigator::new();
        assert_eq!(nav.state(), &ShellState::LoggedOut);
        assert!(!nav.snapshot().authenticated);
        assert_eq!(nav.snapshot().active_view, None);
    }

    #[test]
    fn test_staff_redirected_from_admin_views() {
        for id in ADMIN_ONLY_VIEWS {
            let mut nav = logged_in(Role::Staff);
            nav.navigate(ViewId::from("orders"));

            assert_eq!(nav.navigate(ViewId::from(id)), Transition::Redirected);
            assert_eq!(nav.active_view(), Some(&ViewId::HOME), "{id}");
        }
    }

    #[test]
    fn test_admin_reaches_every_known_view() {
        let mut nav = logged_in(Role::Admin);
        for view in KnownView::ALL {
            assert_eq!(nav.navigate(view.into()), Transition::Navigated);
            assert_eq!(nav.active_view(), Some(&ViewId::Known(view)));
        }
    }

    #[test]
    fn test_navigate_always_closes_sidebar() {
        for role in Role::ALL {
            for id in ["orders", "analytics", "nonexistent-view", "finance"] {
                let mut nav = logged_in(role);
                nav.toggle_sidebar(true);
                nav.navigate(ViewId::from(id));
                assert!(!nav.snapshot().sidebar_open, "{role} -> {id}");
            }
        }
    }

    #[test]
    fn test_login_resets_navigation() {
        let mut nav = logged_in(Role::Admin);
        nav.navigate(ViewId::from("settings"));
        nav.toggle_sidebar(true);

        assert_eq!(nav.login(Role::Staff), Transition::LoggedIn { role: Role::Staff });
        let snapshot = nav.snapshot();
        assert_eq!(snapshot.role, Some(Role::Staff));
        assert_eq!(snapshot.active_view, Some(ViewId::HOME));
        assert!(!snapshot.sidebar_open);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut nav = logged_in(Role::Admin);
        nav.toggle_sidebar(true);

        assert_eq!(nav.logout(), Transition::LoggedOut);
        assert!(!nav.snapshot().authenticated);
        assert!(!nav.snapshot().sidebar_open);

        assert_eq!(nav.navigate(ViewId::from("orders")), Transition::Ignored);
        assert_eq!(nav.toggle_sidebar(true), Transition::Ignored);
        assert_eq!(nav.state(), &ShellState::LoggedOut);
    }

    #[test]
    fn test_logout_twice_is_noop() {
        let mut nav = logged_in(Role::Staff);
        nav.logout();
        assert_eq!(nav.logout(), Transition::Ignored);
        assert_eq!(nav.state(), &ShellState::LoggedOut);
    }

    #[test]
    fn test_unknown_view_passes_through() {
        let mut nav = logged_in(Role::Admin);
        assert_eq!(nav.navigate(ViewId::from("nonexistent-view")), Transition::Navigated);
        assert_eq!(
            nav.active_view(),
            Some(&ViewId::Unrecognized("nonexistent-view".to_string()))
        );
    }

    #[test]
    fn test_admin_reaches_finance_placeholder() {
        let mut nav = logged_in(Role::Admin);
        nav.navigate(ViewId::from("finance"));
        assert_eq!(nav.active_view().map(ViewId::as_str), Some("finance"));
    }

    #[test]
    fn test_toggle_sidebar_keeps_view() {
        let mut nav = logged_in(Role::Admin);
        nav.navigate(ViewId::from("customers"));

        assert_eq!(nav.toggle_sidebar(true), Transition::SidebarToggled { open: true });
        assert!(nav.snapshot().sidebar_open);
        assert_eq!(nav.toggle_sidebar(false), Transition::SidebarToggled { open: false });
        assert!(!nav.snapshot().sidebar_open);
        assert_eq!(nav.active_view(), Some(&ViewId::Known(KnownView::Customers)));
    }

    #[test]
    fn test_scenario_staff_analytics() {
        let mut nav = Navigator::new();
        nav.login(Role::Staff);
        nav.navigate(ViewId::from("analytics"));
        assert_eq!(nav.snapshot().active_view, Some(ViewId::HOME));
    }

    #[test]
    fn test_scenario_admin_orders() {
        let mut nav = Navigator::new();
        nav.login(Role::Admin);
        nav.navigate(ViewId::from("orders"));
        let snapshot = nav.snapshot();
        assert_eq!(snapshot.active_view, Some(ViewId::Known(KnownView::Orders)));
        assert!(!snapshot.sidebar_open);
    }

    #[test]
    fn test_scenario_toggle_then_navigate() {
        let mut nav = Navigator::new();
        nav.login(Role::Admin);
        nav.toggle_sidebar(true);
        nav.navigate(ViewId::from("products"));
        assert!(!nav.snapshot().sidebar_open);
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut nav = Navigator::new();
        let events = [
            ShellEvent::Login { role: Role::Staff },
            ShellEvent::ToggleSidebar { open: true },
            ShellEvent::Navigate {
                view: ViewId::from("users"),
            },
        ];
        let transitions: Vec<Transition> = events.into_iter().map(|e| nav.apply(e)).collect();

        assert_eq!(
            transitions,
            vec![
                Transition::LoggedIn { role: Role::Staff },
                Transition::SidebarToggled { open: true },
                Transition::Redirected,
            ]
        );
        assert_eq!(nav.apply(ShellEvent::Logout), Transition::LoggedOut);
    }

    #[test]
    fn test_event_json_shape() {
        let event: ShellEvent =
            serde_json::from_str(r#"{"type":"navigate","view":"online-catalog"}"#).unwrap();
        assert_eq!(
            event,
            ShellEvent::Navigate {
                view: ViewId::Known(KnownView::OnlineCatalog)
            }
        );

        let event: ShellEvent =
            serde_json::from_str(r#"{"type":"toggle_sidebar","open":true}"#).unwrap();
        assert_eq!(event, ShellEvent::ToggleSidebar { open: true });

        assert!(serde_json::from_str::<ShellEvent>(r#"{"type":"login","role":"owner"}"#).is_err());
    }

    #[test]
    fn test_snapshot_serializes() {
        let nav = logged_in(Role::Staff);
        let json = serde_json::to_value(nav.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "authenticated": true,
                "role": "staff",
                "active_view": "home",
                "sidebar_open": false,
            })
        );
    }

    #[test]
    fn test_navigator_restores_from_stored_state() {
        let mut nav = logged_in(Role::Admin);
        nav.navigate(ViewId::from("finance"));
        nav.toggle_sidebar(true);

        let stored = serde_json::to_value(&nav).unwrap();
        assert_eq!(stored["status"], "logged_in");

        let restored: Navigator = serde_json::from_value(stored).unwrap();
        assert_eq!(restored.state(), nav.state());
        assert_eq!(restored.snapshot(), nav.snapshot());

        let empty: Navigator = serde_json::from_str(r#"{"status":"logged_out"}"#).unwrap();
        assert_eq!(empty.state(), &ShellState::LoggedOut);
    }
}
