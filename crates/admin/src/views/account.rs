//! Account view: the signed-in profile and the logout button.

use askama::Template;

use easy_cebu_core::Role;

use super::{ShellView, ViewContext};
use crate::filters;

/// Demo profile shown for each role.
///
/// There is no user store behind the shell; the role picked at login is the
/// whole identity.
struct Profile {
    name: &'static str,
    email: &'static str,
    access_level: &'static str,
}

const fn profile_for(role: Role) -> Profile {
    match role {
        Role::Admin => Profile {
            name: "Easy Cebu Admin",
            email: "admin@easycebu.com",
            access_level: "Full Access Administrator",
        },
        Role::Staff => Profile {
            name: "Staff Member 01",
            email: "staff01@easycebu.com",
            access_level: "Limited Staff Access",
        },
    }
}

#[derive(Template)]
#[template(path = "views/account.html")]
struct AccountTemplate<'a> {
    role: Role,
    is_admin: bool,
    name: &'a str,
    email: &'a str,
    access_level: &'a str,
    store_name: &'a str,
}

/// Profile card for the current role.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountView;

impl ShellView for AccountView {
    fn render(&self, ctx: &ViewContext<'_>) -> askama::Result<String> {
        let profile = profile_for(ctx.role);
        AccountTemplate {
            role: ctx.role,
            is_admin: ctx.role.is_admin(),
            name: profile.name,
            email: profile.email,
            access_level: profile.access_level,
            store_name: ctx.store_name,
        }
        .render()
    }
}
