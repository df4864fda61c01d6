//! New product view.

use askama::Template;

use super::{ShellView, ViewContext};

#[derive(Template)]
#[template(path = "views/new_product.html")]
struct NewProductTemplate;

#[derive(Debug, Clone, Copy, Default)]
pub struct NewProductView;

impl ShellView for NewProductView {
    fn render(&self, _ctx: &ViewContext<'_>) -> askama::Result<String> {
        NewProductTemplate.render()
    }
}
