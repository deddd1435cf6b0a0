//! # Page Templates
//!
//! Pages are minijinja templates kept as standalone `.html` files and embedded at compile
//! time, so the binary is self-contained.
//!
//! Every page extends `layout.html`, which owns the document shell and the status message
//! banner. A page only fills in `title` and `content`.
//!
//! Page context:
//! - `view`: the serialized [`listsapp::view::View`] (`view.lists`, `view.list`, ...)
//! - `status`: the status message for this page, if any (`status.level`, `status.text`)

pub const LAYOUT: &str = include_str!("templates/layout.html");
pub const LISTS: &str = include_str!("templates/lists.html");
pub const NEW_LIST: &str = include_str!("templates/new_list.html");
pub const LIST: &str = include_str!("templates/list.html");
pub const EDIT_LIST: &str = include_str!("templates/edit_list.html");
pub const NOT_FOUND: &str = include_str!("templates/not_found.html");

/// Source of the template called `name`.
pub fn lookup(name: &str) -> Option<&'static str> {
    match name {
        "layout.html" => Some(LAYOUT),
        "lists.html" => Some(LISTS),
        "new_list.html" => Some(NEW_LIST),
        "list.html" => Some(LIST),
        "edit_list.html" => Some(EDIT_LIST),
        "not_found.html" => Some(NOT_FOUND),
        _ => None,
    }
}
