//! # Rendering
//!
//! Turns a [`View`] and its status message into an HTML page. Templates come from
//! [`crate::templates`] through a minijinja loader; the `.html` extension turns on HTML
//! auto-escaping, so list and todo names are always escaped.

use crate::templates;
use listsapp::flash::StatusMessage;
use listsapp::view::View;
use minijinja::{context, Environment};
use once_cell::sync::Lazy;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| Ok(templates::lookup(name).map(str::to_string)));
    env
});

pub fn page(view: &View, status: Option<&StatusMessage>) -> Result<String, minijinja::Error> {
    let template = TEMPLATES.get_template(view.template_name())?;
    template.render(context! { view => view, status => status })
}
