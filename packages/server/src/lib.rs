#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the civic map application.
//!
//! Serves the REST API that the report list, report form, and admin
//! triage views consume: the department and district catalogs, report
//! listing with geographic filters, report submission with department
//! auto-assignment, status triage, and community voting. Reports live in
//! an in-memory store; there is no persistence across restarts.

mod handlers;
pub mod store;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use civic_map_directory::{DepartmentDirectory, DistrictDirectory};

use crate::store::ReportStore;

/// Shared application state.
pub struct AppState {
    /// In-memory report store.
    pub store: ReportStore,
    /// Department catalog, loaded once at startup.
    pub departments: DepartmentDirectory,
    /// District registry, loaded once at startup.
    pub districts: DistrictDirectory,
}

/// Starts the civic map API server.
///
/// Loads the department and district catalogs, then starts the Actix-Web
/// HTTP server. This is a regular async function — the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if an embedded catalog TOML file fails to parse (a development
/// error, caught during CI).
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Loading department and district catalogs...");
    let state = web::Data::new(AppState {
        store: ReportStore::new(),
        departments: DepartmentDirectory::load(),
        districts: DistrictDirectory::load(),
    });

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
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/departments", web::get().to(handlers::departments))
                    .route("/districts", web::get().to(handlers::districts))
                    .route("/reports", web::get().to(handlers::reports))
                    .route("/reports", web::post().to(handlers::submit_report))
                    .route("/reports/search", web::post().to(handlers::search_reports))
                    .route(
                        "/reports/{id}/status",
                        web::post().to(handlers::change_status),
                    )
                    .route("/reports/{id}/vote", web::post().to(handlers::vote)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
