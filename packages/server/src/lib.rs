#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the detention report.
//!
//! Serves the year selector, the computed report for a year, and the static
//! taxonomy as JSON. The dataset is loaded lazily on the first request that
//! needs it and memoized in a [`DatasetCache`] shared by every worker.

mod handlers;
pub mod interactive;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use trace_report_source::cache::DatasetCache;
use trace_report_source::definition::DatasetDefinition;
use trace_report_source::location::DataLocation;
use trace_report_source::registry::default_dataset;

/// Environment variable overriding the dataset location.
pub const SOURCE_ENV: &str = "TRACE_REPORT_SOURCE";

/// Shared application state.
pub struct AppState {
    /// Loaded tables, keyed by location.
    pub cache: Arc<DatasetCache>,
    /// Column mapping and format of the served dataset.
    pub definition: DatasetDefinition,
    /// Where the served dataset is read from.
    pub location: DataLocation,
}

impl AppState {
    /// Creates state serving `definition` from `location` with an empty
    /// cache.
    #[must_use]
    pub fn new(definition: DatasetDefinition, location: DataLocation) -> Self {
        Self {
            cache: Arc::new(DatasetCache::new()),
            definition,
            location,
        }
    }

    /// The default dataset, read from `TRACE_REPORT_SOURCE` when set and
    /// from the dataset's own URL otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        let definition = default_dataset();
        let location = std::env::var(SOURCE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| definition.default_location(), |s| DataLocation::from(s.as_str()));
        Self::new(definition, location)
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/years", web::get().to(handlers::years))
            .route("/report", web::get().to(handlers::report))
            .route("/taxonomy", web::get().to(handlers::taxonomy)),
    );
}

/// Starts the report API server with state taken from the environment.
///
/// This is a regular async function; the caller provides the runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    serve(AppState::from_env()).await
}

/// Serves `state` on `BIND_ADDR`:`PORT` (default `127.0.0.1:8080`).
///
/// Does not initialize logging, so callers that already installed a logger
/// can use it directly.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn serve(state: AppState) -> std::io::Result<()> {
    log::info!(
        "Serving dataset '{}' from {}",
        state.definition.id,
        state.location
    );
    let state = web::Data::new(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
