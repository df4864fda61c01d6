//! Core types for the back-office shell.

pub mod role;
pub mod view;

pub use role::{ParseRoleError, Role};
pub use view::{KnownView, ViewId};
