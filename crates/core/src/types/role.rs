//! Session role.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::policy;
use crate::types::ViewId;

/// Error returned when a string is not a known [`Role`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);

/// Authorization level of a signed-in session.
///
/// The role is picked on the login surface and is never checked against a
/// credential store. `Admin` is the preselected choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including the admin-only views.
    #[default]
    Admin,
    /// Store staff; admin-only views are out of reach.
    Staff,
}

impl Role {
    /// Every role, in the order the login surface offers them.
    pub const ALL: [Self; 2] = [Self::Admin, Self::Staff];

    /// Returns the role identifier (`admin` or `staff`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }

    /// Whether this role may hold `view` as its active view.
    #[must_use]
    pub fn can_access(self, view: &ViewId) -> bool {
        !policy::is_restricted(view, self)
    }

    /// Whether this is the full-access role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            _ => Err(ParseRoleError(s.to_owned())),
        }
    }
}
