//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Timing;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{get_user, register_user};

/// Assemble the application: routes, shared state, and the timing layer.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use user_registry::inbound::http::state::HttpState;
/// use user_registry::outbound::memory::InMemoryUserStore;
/// use user_registry::server::build_app;
///
/// let state = web::Data::new(HttpState::new(Arc::new(InMemoryUserStore::new())));
/// let _app = build_app(state);
/// ```
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Timing)
        .service(register_user)
        .service(get_user);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// Every worker shares the single store carried by `config`.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, users } = config;
    let http_state = web::Data::new(HttpState::new(users));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "user registry listening");
    Ok(server)
}
