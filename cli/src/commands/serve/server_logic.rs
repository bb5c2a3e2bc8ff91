//! # Leadbox HTTP Server
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! Builds the Axum router for the site backend and runs it until Ctrl+C or
//! SIGTERM.
//!
//! | Route                      | Handler                          |
//! |----------------------------|----------------------------------|
//! | `GET  /api/health`         | `handlers::health`               |
//! | `POST /api/contacts`       | `handlers::create_contact`       |
//! | `GET  /api/contacts`       | `handlers::list_contacts`        |
//! | `POST /api/newsletter`     | `handlers::subscribe_newsletter` |
//! | `GET  /api/newsletters`    | `handlers::list_subscribers`     |
//! | `POST /api/chat`           | `handlers::send_chat_message`    |
//! | `GET  /api/chat/{session}` | `handlers::chat_history`         |
//! | `GET  /admin`              | `dashboard::admin_dashboard`     |
//!
//! Every route sits behind request tracing and, unless disabled, a permissive
//! CORS layer.
//!
use super::config::ServerConfig;
use super::dashboard;
use super::handlers::{self, AppState};
use crate::core::error::Result;
use crate::store::SiteStore;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// # Run HTTP Server (`run_server`)
///
/// Binds `config.address()`, prints where the site and dashboard are reachable
/// and serves until a shutdown signal arrives. In-flight requests are allowed
/// to finish before returning.
///
/// ## Errors
///
/// Fails if the address cannot be bound or the server stops with an I/O error.
pub async fn run_server(config: ServerConfig, store: SiteStore) -> Result<()> {
    let addr = config.address();
    let data_dir = store.data_dir().display().to_string();
    let app = create_app(AppState::new(store), config.enable_cors);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    println!("\n=================================================================");
    println!("📂 Data directory:  {}", data_dir);
    println!("🌐 API:             http://{}/api", addr);
    println!("📊 Admin dashboard: http://{}/admin", addr);
    println!("🔒 CORS enabled:    {}", config.enable_cors);
    println!("=================================================================\n");
    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Builds the router with all routes and middleware.
pub fn create_app(state: AppState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/contacts",
            post(handlers::create_contact).get(handlers::list_contacts),
        )
        .route("/api/newsletter", post(handlers::subscribe_newsletter))
        .route("/api/newsletters", get(handlers::list_subscribers))
        .route("/api/chat", post(handlers::send_chat_message))
        .route("/api/chat/{session_id}", get(handlers::chat_history))
        .route("/admin", get(dashboard::admin_dashboard))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}
