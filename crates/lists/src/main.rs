//! # Lists Server
//!
//! The binary is thin: it parses flags, loads configuration, installs logging and hands
//! control to the HTTP server. All list behavior lives in the `listsapp` library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (this crate)                                    │
//! │  - clap flags + config resolution (cli/)                    │
//! │  - actix-web routing, session cookie (server.rs)            │
//! │  - HTML pages via minijinja templates (render.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Request / Response
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (listsapp::api)                                  │
//! │  - load session → dispatch → save session                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP layer never inspects lists. It turns a
//! [`listsapp::view::Response`] into either a redirect or a rendered page, and that is
//! all it knows about the domain.

mod cli;
mod render;
mod server;
mod templates;

#[actix_web::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
