//! # HTTP Server
//!
//! One catch-all actix-web resource forwards every request to [`ListsApi::handle`].
//! Routing happens in the library, so this module only translates between HTTP and
//! [`Request`]/[`Response`]:
//!
//! - **Session**: the id travels in a cookie (`HttpOnly`, `Path=/`). A missing or
//!   unparsable cookie starts a new session and sets the cookie on the response.
//! - **Forms**: urlencoded POST bodies become the request's form fields. A body that
//!   cannot be decoded is treated as an empty form.
//! - **Redirects** are `303 See Other`, so the browser follows with a GET.
//! - **Pages** are rendered HTML with `200` or `404`.
//! - **Failures** of the session store or a template give a `500` and an `error!` line.
//!
//! The API sits behind a mutex, so each request's load, dispatch and save run as one unit.
//! A background task sweeps idle sessions every [`SWEEP_INTERVAL`], starting at boot.

use crate::render;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context;
use listsapp::api::ListsApi;
use listsapp::config::ListsConfig;
use listsapp::handler::Request;
use listsapp::router::Method;
use listsapp::session::{open_store, BoxedSessionStore, SessionId};
use listsapp::view::{PageStatus, Response};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub struct AppState {
    api: Mutex<ListsApi<BoxedSessionStore>>,
    cookie_name: String,
}

impl AppState {
    pub fn new(api: ListsApi<BoxedSessionStore>, cookie_name: impl Into<String>) -> Self {
        Self {
            api: Mutex::new(api),
            cookie_name: cookie_name.into(),
        }
    }

    /// Sessions are only ever saved whole, so a lock poisoned by a panic is reused.
    fn api(&self) -> MutexGuard<'_, ListsApi<BoxedSessionStore>> {
        self.api.lock().unwrap_or_else(|poisoned| {
            warn!("recovering session lock after a panic");
            self.api.clear_poison();
            PoisonError::into_inner(poisoned)
        })
    }

    /// Removes sessions idle for longer than `ttl`. Failures are logged, not fatal.
    pub fn sweep(&self, ttl: chrono::Duration) -> usize {
        match self.api().sweep_sessions(ttl) {
            Ok(removed) => removed,
            Err(e) => {
                warn!(error = %e, "session sweep failed");
                0
            }
        }
    }

    /// The session named by the request's cookie, or a new one. The flag is true when
    /// the id is new and the cookie must be set.
    fn session_id(&self, req: &HttpRequest) -> (SessionId, bool) {
        match req
            .cookie(&self.cookie_name)
            .and_then(|cookie| cookie.value().parse().ok())
        {
            Some(id) => (id, false),
            None => (SessionId::new(), true),
        }
    }

    fn session_cookie(&self, id: &SessionId) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{tail:.*}").to(handle));
}

async fn handle(
    req: HttpRequest,
    form: Option<web::Form<HashMap<String, String>>>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(method) = Method::parse(req.method().as_str()) else {
        warn!(method = %req.method(), path = req.path(), "unsupported method");
        return HttpResponse::MethodNotAllowed().finish();
    };

    let (id, is_new) = state.session_id(&req);
    let mut request = Request::new(method, req.path());
    if let Some(form) = form {
        request.form = form.into_inner();
    }

    let mut response = match respond(&state, &id, &request) {
        Ok(response) => response,
        Err(e) => {
            error!(path = %request.path, error = %format!("{:#}", e), "request failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("Something went wrong.")
        }
    };

    if is_new {
        debug!(session = %id, "new session");
        if let Err(e) = response.add_cookie(&state.session_cookie(&id)) {
            warn!(error = %e, "could not set session cookie");
        }
    }
    response
}

fn respond(state: &AppState, id: &SessionId, request: &Request) -> anyhow::Result<HttpResponse> {
    let response = state
        .api()
        .handle(id, request)
        .with_context(|| format!("{:?} {}", request.method, request.path))?;

    match response {
        Response::Redirect { location } => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()),
        Response::Render {
            view,
            status,
            page_status,
        } => {
            let html = render::page(&view, status.as_ref())
                .with_context(|| format!("rendering {}", view.template_name()))?;
            let code = match page_status {
                PageStatus::Ok => StatusCode::OK,
                PageStatus::NotFound => StatusCode::NOT_FOUND,
            };
            Ok(HttpResponse::build(code)
                .content_type(ContentType::html())
                .body(html))
        }
    }
}

/// Sweeps idle sessions now and then every [`SWEEP_INTERVAL`] for as long as the server
/// runs.
fn spawn_sweeper(state: web::Data<AppState>, ttl: chrono::Duration) {
    actix_web::rt::spawn(async move {
        let mut ticks = actix_web::rt::time::interval(SWEEP_INTERVAL);
        loop {
            ticks.tick().await;
            state.sweep(ttl);
        }
    });
}

/// Opens the session store, starts the sweeper and serves until shut down.
pub async fn serve(config: ListsConfig) -> anyhow::Result<()> {
    let store = open_store(&config).context("failed to open session store")?;
    let state = web::Data::new(AppState::new(
        ListsApi::new(store),
        config.cookie_name.clone(),
    ));
    spawn_sweeper(state.clone(), config.session_ttl());
    let address = config.address();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(app_config)
    })
    .bind(&address)
    .with_context(|| format!("failed to bind {}", address))?;

    info!(%address, "listening");
    server.run().await.context("server terminated")?;
    info!("shut down");
    Ok(())
}
