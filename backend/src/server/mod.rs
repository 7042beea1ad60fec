//! Server construction, middleware wiring and worker lifecycle.

mod config;
mod state_builders;

pub use config::{ServerSettings, SettingsError};
pub use state_builders::{AppComponents, build_components};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use example_data::GenerationError;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::Trace;
use crate::inbound::http::api_scope;
use crate::inbound::http::cors::allow_any_origin;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::ws;
use crate::inbound::ws::state::WsState;

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("user directory generation failed: {0}")]
    Directory(#[from] GenerationError),
    #[error("failed to start HTTP server: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    ws_state: web::Data<WsState>,
}

fn build_app(
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
        ws_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(ws_state)
        .wrap(allow_any_origin())
        .wrap(Trace)
        .service(api_scope())
        .service(ws::ws_resource())
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server bound to `listener`.
///
/// The caller owns the worker: spawn [`AppComponents::worker`] alongside the
/// returned [`Server`] (see [`run`]).
///
/// # Errors
/// Propagates [`std::io::Error`] when the listener cannot be used.
pub fn create_server(
    health_state: web::Data<HealthState>,
    components: &AppComponents,
    listener: std::net::TcpListener,
) -> std::io::Result<Server> {
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: components.http_state.clone(),
        ws_state: components.ws_state.clone(),
    };
    let server = HttpServer::new(move || build_app(deps.clone()))
        .listen(listener)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Build components, bind, and serve until the server stops.
///
/// The queue worker runs for the lifetime of the server and is cancelled once
/// the server has shut down.
///
/// # Errors
/// Returns [`StartupError`] for invalid settings, directory generation
/// failures, or socket errors.
pub async fn run(settings: &ServerSettings) -> Result<(), StartupError> {
    let components = build_components(settings)?;
    let listener = std::net::TcpListener::bind((settings.host(), settings.port()))?;
    let local_addr = listener.local_addr()?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &components, listener)?;

    let shutdown = CancellationToken::new();
    let worker = components.worker.clone().spawn(shutdown.clone());
    info!(%local_addr, "showcase server listening");

    let served = server.await;
    health_state.mark_unhealthy();
    shutdown.cancel();
    if let Err(error) = worker.await {
        warn!(error = %error, "queue worker task ended abnormally");
    }
    served.map_err(StartupError::from)
}
