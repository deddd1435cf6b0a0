//! # Command Layer
//!
//! The list and todo operations. Each command lives in its own submodule and is a plain
//! function over a [`ListStore`](crate::model::ListStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate their input and reject it without touching the store
//! - Resolve indexes through [`crate::index`]
//! - Apply exactly one mutation
//! - Return a [`CmdResult`] carrying the status message for the user
//!
//! ## What Commands Do NOT Do
//!
//! - **Trim input**: the request layer hands over already-trimmed text
//! - **Know about sessions**: the pending status message is the caller's business
//! - **Pick a page**: redirect vs re-render is decided in [`crate::handler`]
//!
//! ## Testing Strategy
//!
//! **This is where most of the testing lives.** Tests build a `ListStore` by hand (or via
//! [`crate::test_utils`]), run the command, and check both the returned result and the
//! resulting store, including that failed commands leave the store unchanged.
//!
//! ## Command Modules
//!
//! - [`create`]: create a list
//! - [`rename`]: rename a list
//! - [`delete`]: delete a list
//! - [`add_todo`]: append a todo to a list
//! - [`delete_todo`]: remove a todo
//! - [`completion`]: set one todo's completed flag, or complete a whole list
//! - [`get`]: read lists for display

use crate::flash::StatusMessage;
use crate::index::DisplayList;

pub mod add_todo;
pub mod completion;
pub mod create;
pub mod delete;
pub mod delete_todo;
pub mod get;
pub mod rename;

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_lists: Vec<DisplayList>,
    pub messages: Vec<StatusMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: StatusMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_lists(mut self, lists: Vec<DisplayList>) -> Self {
        self.listed_lists = lists;
        self
    }

    /// The message the user should see. Later messages supersede earlier ones.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }
}

pub(crate) fn success(text: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(StatusMessage::success(text));
    result
}
