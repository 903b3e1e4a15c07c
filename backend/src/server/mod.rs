//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::UserService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::outbound::persistence::{DbPool, DieselUserRepository};

/// Shared state handed to every worker's `App`.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Build handler state over the SQLite-backed user service.
pub fn build_http_state(pool: DbPool) -> HttpState {
    let repository = Arc::new(DieselUserRepository::new(pool));
    HttpState::from_service(Arc::new(UserService::new(repository)))
}

/// Assemble the application: trace middleware, `/user` routes, health probes
/// and, in debug builds, Swagger UI.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(users::scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Readiness is flagged once the listener is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = web::Data::new(build_http_state(db_pool));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "listening");
    Ok(server)
}
