//! Generic content panel for views whose internals live elsewhere.

use askama::Template;

use easy_cebu_core::KnownView;

use super::{ShellView, ViewContext};

#[derive(Template)]
#[template(path = "views/panel.html")]
struct PanelTemplate<'a> {
    title: &'a str,
    blurb: &'a str,
    store_name: &'a str,
}

/// A titled placeholder panel for one known view.
#[derive(Debug, Clone, Copy)]
pub struct PanelView {
    view: KnownView,
    blurb: &'static str,
}

impl PanelView {
    /// Create a panel for `view` with a one-line description.
    #[must_use]
    pub const fn new(view: KnownView, blurb: &'static str) -> Self {
        Self { view, blurb }
    }
}

impl ShellView for PanelView {
    fn render(&self, ctx: &ViewContext<'_>) -> askama::Result<String> {
        PanelTemplate {
            title: self.view.label(),
            blurb: self.blurb,
            store_name: ctx.store_name,
        }
        .render()
    }
}
