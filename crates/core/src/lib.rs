//! Easy Cebu Core - Session and navigation controller.
//!
//! This crate holds the state machine behind the back-office shell:
//! - which role (if any) is signed in,
//! - which view is active,
//! - whether the mobile sidebar overlay is open.
//!
//! # Architecture
//!
//! The core crate contains only types and pure transitions - no I/O, no HTTP,
//! no templates. The `admin` crate owns a [`Navigator`] and renders whatever
//! [`ShellSnapshot`] it exposes.
//!
//! # Modules
//!
//! - [`types`] - Roles and view identifiers
//! - [`policy`] - Which views are admin-only
//! - [`navigation`] - The [`Navigator`] state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod navigation;
pub mod policy;
pub mod types;

pub use navigation::{
    NavigationState, Navigator, Session, ShellEvent, ShellSnapshot, ShellState, Transition,
};
pub use policy::is_restricted;
pub use types::*;
