//! Admin panel view.
//!
//! Its shortcuts post to `/navigate` like any sidebar link, so the role
//! policy still applies to them.

use askama::Template;

use super::{ShellView, ViewContext};

#[derive(Template)]
#[template(path = "views/admin_panel.html")]
struct AdminPanelTemplate<'a> {
    store_name: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AdminPanelView;

impl ShellView for AdminPanelView {
    fn render(&self, ctx: &ViewContext<'_>) -> askama::Result<String> {
        AdminPanelTemplate {
            store_name: ctx.store_name,
        }
        .render()
    }
}
