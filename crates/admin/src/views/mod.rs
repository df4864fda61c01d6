//! View collaborators.
//!
//! Each known view is an opaque renderable unit. The shell addresses them by
//! [`KnownView`] through a [`ViewRegistry`] and never looks inside; the only
//! thing a collaborator may do to the shell is post one of the navigation
//! forms (`/navigate`, `/logout`).

mod account;
mod admin_panel;
mod new_product;
mod panel;

use std::collections::HashMap;
use std::fmt;

use easy_cebu_core::{KnownView, Role, ViewId};

pub use account::AccountView;
pub use admin_panel::AdminPanelView;
pub use new_product::NewProductView;
pub use panel::PanelView;

/// What a collaborator may know about the session.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub role: Role,
    pub store_name: &'a str,
}

/// A renderable unit mounted in the shell's content area.
pub trait ShellView: Send + Sync {
    /// Render the view body as HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying template fails to render.
    fn render(&self, ctx: &ViewContext<'_>) -> askama::Result<String>;
}

/// Collaborators keyed by the view they render.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<KnownView, Box<dyn ShellView>>,
}

impl ViewRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a collaborator for every known view.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for view in KnownView::ALL {
            registry.views.insert(view, standard_view(view));
        }
        registry
    }

    /// Register (or replace) the collaborator for `view`.
    pub fn register(
        &mut self,
        view: KnownView,
        collaborator: impl ShellView + 'static,
    ) -> &mut Self {
        self.views.insert(view, Box::new(collaborator));
        self
    }

    /// Collaborator for `view`, if one is registered.
    ///
    /// Unrecognized identifiers never have one.
    #[must_use]
    pub fn get(&self, view: &ViewId) -> Option<&dyn ShellView> {
        view.known()
            .and_then(|known| self.views.get(&known))
            .map(|collaborator| &**collaborator)
    }

    /// Known views that have no collaborator.
    #[must_use]
    pub fn missing(&self) -> Vec<KnownView> {
        KnownView::ALL
            .into_iter()
            .filter(|view| !self.views.contains_key(view))
            .collect()
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut views: Vec<&KnownView> = self.views.keys().collect();
        views.sort_unstable();
        f.debug_struct("ViewRegistry").field("views", &views).finish()
    }
}

fn standard_view(view: KnownView) -> Box<dyn ShellView> {
    match view {
        KnownView::Account => Box::new(AccountView),
        KnownView::AdminPanel => Box::new(AdminPanelView),
        KnownView::NewProduct => Box::new(NewProductView),
        KnownView::Home => Box::new(PanelView::new(
            view,
            "Today's sales, quick actions and store activity.",
        )),
        KnownView::Checkout => Box::new(PanelView::new(view, "Ring up a sale and take payment.")),
        KnownView::Orders => Box::new(PanelView::new(
            view,
            "Review, fulfil and refund customer orders.",
        )),
        KnownView::Products => Box::new(PanelView::new(view, "Browse and edit the product catalogue.")),
        KnownView::SmartAssistant => Box::new(PanelView::new(
            view,
            "Ask questions about sales, stock and customers.",
        )),
        KnownView::OnlineCatalog => Box::new(PanelView::new(
            view,
            "Choose what the online catalogue shows.",
        )),
        KnownView::Coupons => Box::new(PanelView::new(view, "Create and retire discount coupons.")),
        KnownView::Customers => Box::new(PanelView::new(
            view,
            "Customer profiles and purchase history.",
        )),
        KnownView::Transactions => Box::new(PanelView::new(view, "Daily cash and card transactions.")),
        KnownView::Analytics => Box::new(PanelView::new(view, "Sales trends and store performance.")),
        KnownView::Users => Box::new(PanelView::new(view, "Staff accounts and roles.")),
        KnownView::Settings => Box::new(PanelView::new(view, "Store preferences and integrations.")),
        KnownView::Help => Box::new(PanelView::new(view, "Guides and support contacts.")),
    }
}
