//! Server construction and route wiring.

mod settings;

pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use chat_backend::domain::ports::FixtureIdentityProvisioner;
use chat_backend::inbound::http::accounts::{login, register};
use chat_backend::inbound::http::json_config;
use chat_backend::inbound::http::state::HttpState;
use chat_backend::outbound::memory::MemoryUserStore;

fn build_app(
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
    let api = web::scope("/api/v1").service(register).service(login);

    App::new()
        .app_data(http_state)
        .app_data(json_config())
        .service(api)
}

/// Construct an Actix HTTP server from the loaded settings.
///
/// The development wiring uses the in-memory store and the fixture identity
/// provisioner.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(
        Arc::new(MemoryUserStore::default()),
        Arc::new(FixtureIdentityProvisioner),
    ));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind((settings.host(), settings.port()))?
        .run();

    info!(host = settings.host(), port = settings.port(), "chat backend listening");
    Ok(server)
}
