//! Shell renderer.
//!
//! Turns a [`ShellSnapshot`] into the page the browser sees: the login
//! surface while logged out, otherwise the persistent layout (sidebar,
//! mobile header, backdrop) wrapped around the active view's collaborator.
//! The renderer owns no state; every control it emits posts back to one of
//! the navigator's operations.

use askama::Template;

use easy_cebu_core::{KnownView, Role, ShellSnapshot, ViewId};

use crate::error::AppError;
use crate::filters;
use crate::views::{ViewContext, ViewRegistry};

/// Mobile header shown above the content below the `lg` breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileHeader {
    /// The view brings its own back button; no header.
    Hidden,
    /// Sidebar toggle only.
    Toggle,
    /// Sidebar toggle followed by a title.
    Titled(String),
}

impl MobileHeader {
    /// Header variant for `view`.
    #[must_use]
    pub fn for_view(view: &ViewId, store_name: &str) -> Self {
        match view.known() {
            Some(KnownView::Home) => Self::Titled(store_name.to_string()),
            Some(KnownView::Account) => Self::Titled("MY ACCOUNT".to_string()),
            Some(KnownView::AdminPanel | KnownView::NewProduct) => Self::Hidden,
            Some(_) => Self::Toggle,
            None => Self::Titled(view.as_str().to_string()),
        }
    }

    /// Whether the sidebar toggle button is shown.
    #[must_use]
    pub const fn shows_toggle(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Title next to the toggle, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Titled(title) => Some(title),
            Self::Hidden | Self::Toggle => None,
        }
    }
}

/// A sidebar navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar links offered to `role`, with `active` highlighted.
///
/// Admin-only views are left out for staff; the navigator would redirect
/// them anyway.
#[must_use]
pub fn nav_links(role: Role, active: &ViewId) -> Vec<NavLink> {
    KnownView::ALL
        .into_iter()
        .filter(|view| role.can_access(&ViewId::Known(*view)))
        .map(|view| NavLink {
            id: view.as_str(),
            label: view.label(),
            active: active.is(view),
        })
        .collect()
}

/// Login surface template.
#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    store_name: &'a str,
    roles: &'a [Role],
}

/// Persistent layout template.
#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    store_name: &'a str,
    role: Role,
    links: Vec<NavLink>,
    sidebar_open: bool,
    show_toggle: bool,
    mobile_title: Option<&'a str>,
    content: String,
}

/// Content for an active view without a collaborator.
#[derive(Template)]
#[template(path = "placeholder.html")]
struct PlaceholderTemplate<'a> {
    view_id: &'a str,
}

/// Renders snapshots against a view registry.
#[derive(Debug, Clone, Copy)]
pub struct ShellRenderer<'a> {
    views: &'a ViewRegistry,
    store_name: &'a str,
}

impl<'a> ShellRenderer<'a> {
    #[must_use]
    pub const fn new(views: &'a ViewRegistry, store_name: &'a str) -> Self {
        Self { views, store_name }
    }

    /// Render the full page for `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Template` if a template fails to render.
    pub fn render(&self, snapshot: &ShellSnapshot) -> Result<String, AppError> {
        match (snapshot.authenticated, snapshot.role, &snapshot.active_view) {
            (true, Some(role), Some(view)) => self.render_layout(role, view, snapshot.sidebar_open),
            _ => self.render_login(),
        }
    }

    fn render_login(&self) -> Result<String, AppError> {
        let html = LoginTemplate {
            store_name: self.store_name,
            roles: &Role::ALL,
        }
        .render()?;
        Ok(html)
    }

    fn render_layout(&self, role: Role, view: &ViewId, sidebar_open: bool) -> Result<String, AppError> {
        let content = self.render_content(role, view)?;
        let header = MobileHeader::for_view(view, self.store_name);

        let html = ShellTemplate {
            store_name: self.store_name,
            role,
            links: nav_links(role, view),
            sidebar_open,
            show_toggle: header.shows_toggle(),
            mobile_title: header.title(),
            content,
        }
        .render()?;
        Ok(html)
    }

    fn render_content(&self, role: Role, view: &ViewId) -> Result<String, AppError> {
        let html = match self.views.get(view) {
            Some(collaborator) => collaborator.render(&ViewContext {
                role,
                store_name: self.store_name,
            })?,
            None => PlaceholderTemplate {
                view_id: view.as_str(),
            }
            .render()?,
        };
        Ok(html)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use easy_cebu_core::Navigator;

    use super::*;

    const STORE: &str = "EASY CEBU";

    fn render(nav: &Navigator) -> String {
        let views = ViewRegistry::standard();
        ShellRenderer::new(&views, STORE)
            .render(&nav.snapshot())
            .unwrap()
    }

    fn logged_in(role: Role, view: &str) -> Navigator {
        let mut nav = Navigator::new();
        nav.login(role);
        nav.navigate(ViewId::from(view));
        nav
    }

    #[test]
    fn test_logged_out_renders_login() {
        let html = render(&Navigator::new());
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains("Login as admin"));
        assert!(html.contains("Login as staff"));
        assert!(!html.contains(r#"class="sidebar"#));
    }

    #[test]
    fn test_login_offers_admin_first() {
        let html = render(&Navigator::new());
        let admin = html.find("Login as admin").unwrap();
        let staff = html.find("Login as staff").unwrap();
        assert!(admin < staff);
    }

    #[test]
    fn test_layout_mounts_active_view() {
        let html = render(&logged_in(Role::Admin, "orders"));
        assert!(html.contains("Review, fulfil and refund customer orders."));
        assert!(html.contains(r#"action="/logout""#));
    }

    #[test]
    fn test_unknown_view_renders_placeholder() {
        let html = render(&logged_in(Role::Admin, "nonexistent-view"));
        assert!(html.contains("View not implemented: nonexistent-view"));
    }

    #[test]
    fn test_placeholder_escapes_identifier() {
        let html = render(&logged_in(Role::Admin, "<script>alert(1)</script>"));
        assert!(html.contains("View not implemented:"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_staff_sidebar_hides_admin_links() {
        let links = nav_links(Role::Staff, &ViewId::HOME);
        let ids: Vec<&str> = links.iter().map(|l| l.id).collect();
        assert!(ids.contains(&"orders"));
        assert!(ids.contains(&"transactions"));
        for hidden in ["analytics", "users", "settings", "admin-panel"] {
            assert!(!ids.contains(&hidden), "{hidden}");
        }
    }

    #[test]
    fn test_admin_sidebar_has_every_view() {
        let links = nav_links(Role::Admin, &ViewId::from("coupons"));
        assert_eq!(links.len(), KnownView::ALL.len());

        let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.id).collect();
        assert_eq!(active, vec!["coupons"]);
    }

    #[test]
    fn test_no_link_active_for_unknown_view() {
        let links = nav_links(Role::Admin, &ViewId::from("finance"));
        assert!(links.iter().all(|l| !l.active));
    }

    #[test]
    fn test_mobile_header_variants() {
        let header = |id: &str| MobileHeader::for_view(&ViewId::from(id), STORE);

        assert_eq!(header("home"), MobileHeader::Titled("EASY CEBU".to_string()));
        assert_eq!(header("account"), MobileHeader::Titled("MY ACCOUNT".to_string()));
        assert_eq!(header("admin-panel"), MobileHeader::Hidden);
        assert_eq!(header("new-product"), MobileHeader::Hidden);
        assert_eq!(header("checkout"), MobileHeader::Toggle);
        assert_eq!(header("mystery"), MobileHeader::Titled("mystery".to_string()));

        assert!(!MobileHeader::Hidden.shows_toggle());
        assert!(MobileHeader::Toggle.shows_toggle());
        assert_eq!(MobileHeader::Toggle.title(), None);
    }

    #[test]
    fn test_backdrop_only_while_sidebar_open() {
        let mut nav = logged_in(Role::Admin, "orders");
        assert!(!render(&nav).contains("sidebar-backdrop"));

        nav.toggle_sidebar(true);
        let html = render(&nav);
        assert!(html.contains("sidebar-backdrop"));
        assert!(html.contains("sidebar--open"));
    }

    #[test]
    fn test_admin_panel_has_no_mobile_toggle() {
        let html = render(&logged_in(Role::Admin, "admin-panel"));
        assert!(!html.contains("mobile-header"));

        let html = render(&logged_in(Role::Admin, "orders"));
        assert!(html.contains("mobile-header"));
    }
}
