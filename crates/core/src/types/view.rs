//! View identifiers.
//!
//! The shell knows a closed set of views ([`KnownView`]). Anything else a
//! caller asks for is kept verbatim as [`ViewId::Unrecognized`] so the
//! renderer can echo it back in its "not implemented" placeholder.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the views the shell ships a collaborator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownView {
    Home,
    Account,
    AdminPanel,
    NewProduct,
    Checkout,
    Orders,
    Products,
    SmartAssistant,
    OnlineCatalog,
    Coupons,
    Customers,
    Transactions,
    Analytics,
    Users,
    Settings,
    Help,
}

impl KnownView {
    /// Every known view, in sidebar order.
    pub const ALL: [Self; 16] = [
        Self::Home,
        Self::Account,
        Self::AdminPanel,
        Self::NewProduct,
        Self::Checkout,
        Self::Orders,
        Self::Products,
        Self::SmartAssistant,
        Self::OnlineCatalog,
        Self::Coupons,
        Self::Customers,
        Self::Transactions,
        Self::Analytics,
        Self::Users,
        Self::Settings,
        Self::Help,
    ];

    /// Returns the kebab-case identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Account => "account",
            Self::AdminPanel => "admin-panel",
            Self::NewProduct => "new-product",
            Self::Checkout => "checkout",
            Self::Orders => "orders",
            Self::Products => "products",
            Self::SmartAssistant => "smart-assistant",
            Self::OnlineCatalog => "online-catalog",
            Self::Coupons => "coupons",
            Self::Customers => "customers",
            Self::Transactions => "transactions",
            Self::Analytics => "analytics",
            Self::Users => "users",
            Self::Settings => "settings",
            Self::Help => "help",
        }
    }

    /// Human-readable label for navigation links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Account => "My Account",
            Self::AdminPanel => "Admin Panel",
            Self::NewProduct => "New Product",
            Self::Checkout => "Checkout",
            Self::Orders => "Orders",
            Self::Products => "Products",
            Self::SmartAssistant => "Smart Assistant",
            Self::OnlineCatalog => "Online Catalog",
            Self::Coupons => "Coupons",
            Self::Customers => "Customers",
            Self::Transactions => "Transactions",
            Self::Analytics => "Analytics",
            Self::Users => "Users",
            Self::Settings => "Settings",
            Self::Help => "Help",
        }
    }

    /// Look up a known view by its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == id)
    }
}

impl fmt::Display for KnownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identifier of the active view.
///
/// Conversion from a string never fails: unknown identifiers are preserved
/// as [`ViewId::Unrecognized`].
///
/// ```
/// use easy_cebu_core::{KnownView, ViewId};
///
/// assert_eq!(ViewId::from("orders"), ViewId::Known(KnownView::Orders));
/// assert_eq!(
///     ViewId::from("inventory"),
///     ViewId::Unrecognized("inventory".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewId {
    Known(KnownView),
    Unrecognized(String),
}

impl ViewId {
    /// The default view after login and on redirected navigation.
    pub const HOME: Self = Self::Known(KnownView::Home);

    /// Returns the identifier exactly as it was requested.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(view) => view.as_str(),
            Self::Unrecognized(id) => id,
        }
    }

    /// Returns the known view, if this is one.
    #[must_use]
    pub const fn known(&self) -> Option<KnownView> {
        match self {
            Self::Known(view) => Some(*view),
            Self::Unrecognized(_) => None,
        }
    }

    /// Whether this is the given known view.
    #[must_use]
    pub fn is(&self, view: KnownView) -> bool {
        self.known() == Some(view)
    }
}

impl From<KnownView> for ViewId {
    fn from(view: KnownView) -> Self {
        Self::Known(view)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        KnownView::from_id(id).map_or_else(|| Self::Unrecognized(id.to_owned()), Self::Known)
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        match KnownView::from_id(&id) {
            Some(view) => Self::Known(view),
            None => Self::Unrecognized(id),
        }
    }
}

impl From<ViewId> for String {
    fn from(view: ViewId) -> Self {
        match view {
            ViewId::Known(view) => view.as_str().to_owned(),
            ViewId::Unrecognized(id) => id,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
