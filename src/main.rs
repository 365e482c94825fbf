use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_service::{
    api::{AppState, create_router},
    config::Settings,
    db::Db,
    middleware::{cors_layer, host_allowlist, request_id, request_logging},
    services::UserService,
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Settings failures are fatal: the process does not start.
    let settings = Settings::from_env().map_err(|e| format!("Failed to load settings: {}", e))?;

    // Initialize tracing, defaulting the filter from the configured log level
    // unless RUST_LOG overrides it.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "user_service={},tower_http=debug",
                    settings.log_level.as_directive()
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting {} v{}", settings.app.name, settings.app.version);

    let db = Db::connect(&settings.database)
        .await
        .map_err(|e| format!("Failed to connect to PostgreSQL: {}", e))?;

    tracing::info!("Successfully connected to PostgreSQL");

    let settings = Arc::new(settings);
    let user_service = Arc::new(UserService::new(db.clone()));

    let state = AppState {
        settings: settings.clone(),
        user_service,
    };

    // Build router; the last layer added wraps the rest.
    let app = create_router(state)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(axum::middleware::from_fn(request_id))
        .layer(axum::middleware::from_fn_with_state(
            settings.clone(),
            host_allowlist,
        ))
        .layer(cors_layer(&settings.cors))
        .layer(tower_http::catch_panic::CatchPanicLayer::new());

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check available at: http://{}/health", addr);
    tracing::info!("API endpoints available at: http://{}/api/v1/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    db.close().await;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut terminate_signal =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                if let Err(err) = res {
                    tracing::error!("Failed to listen for Ctrl+C: {}", err);
                }
            },
            _ = terminate_signal.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
        }
    }

    tracing::info!("Shutdown signal received, commencing graceful shutdown");
}
