//! Server construction and dependency wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use secure_nest::doc::ApiDoc;
use secure_nest::domain::{ResidentList, VisitorService, seed_example_residents};
use secure_nest::inbound::http::health::{HealthState, live, ready};
use secure_nest::inbound::http::{json_config, query_config};
use secure_nest::inbound::http::residents::{
    bulk_delete_residents, create_resident, delete_resident, list_residents, update_resident,
};
use secure_nest::inbound::http::state::{HttpState, SharedResidentList};
use secure_nest::inbound::http::visitors::{list_visitors, log_visitor};
use secure_nest::outbound::persistence::InMemoryVisitorRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the visitor service and resident list behind the HTTP state.
///
/// # Errors
/// Returns an error when the demo residents cannot be seeded.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let visitors = Arc::new(VisitorService::new(
        Arc::new(InMemoryVisitorRepository::new()),
        config.clock.clone(),
    ));
    let mut residents = ResidentList::new(config.clock.clone());
    if config.seed_residents {
        seed_example_residents(&mut residents)
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    }
    Ok(HttpState::new(
        visitors.clone(),
        visitors,
        SharedResidentList::new(residents),
    ))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
    } = deps;

    let api = web::scope("/api")
        .service(log_visitor)
        .service(list_visitors)
        .service(list_residents)
        .service(bulk_delete_residents)
        .service(create_resident)
        .service(update_resident)
        .service(delete_resident);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Readiness is marked once the socket is bound; the returned [`Server`]
/// must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding, metrics setup or binding the
/// socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    let prometheus = metrics::build_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), seeded = config.seed_residents, "server listening");
    Ok(server)
}
