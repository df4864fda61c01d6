//! Role policy: which views are reserved for admins.
//!
//! This is the only authorization table in the shell. The navigator consults
//! it once per transition; renderers use it to decide which links to offer.

use crate::types::{Role, ViewId};

/// Identifiers a staff session may never hold as its active view.
///
/// `finance` is not one of the shell's known views, so it is matched by
/// identifier rather than by [`KnownView`](crate::types::KnownView).
pub const ADMIN_ONLY_VIEWS: [&str; 5] =
    ["analytics", "users", "settings", "admin-panel", "finance"];

/// Whether `role` is barred from `view`.
///
/// Total and side-effect free. Identifiers outside [`ADMIN_ONLY_VIEWS`],
/// including unrecognized ones, are never restricted.
#[must_use]
pub fn is_restricted(view: &ViewId, role: Role) -> bool {
    role == Role::Staff && ADMIN_ONLY_VIEWS.contains(&view.as_str())
}
