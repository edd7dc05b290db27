//! Server setup and initialization
//!
//! Provides the application builder, dependency wiring and the server runner.

use std::sync::Arc;

use axum::Router;
use linker_common::{AppConfig, AppError, DatabaseConfig, JwtService};
use linker_db::{
    create_pool, run_migrations, PgChatMessageRepository, PgHealthCheck, PgIssueRepository,
    PgPool, PgProxyLinkRepository, PgUserRepository, PoolConfig,
};
use linker_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(create_router(), &config.rate_limit, &config.cors);
    router.with_state(state)
}

/// Connect to PostgreSQL and apply migrations when configured
pub async fn connect_database(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(config))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.run_migrations {
        info!(dir = %config.migrations_dir, "Running database migrations");
        run_migrations(&pool, &config.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    Ok(pool)
}

/// Wire repositories and services on top of an open pool
pub fn create_app_state(config: AppConfig, pool: &PgPool) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .chat_message_repo(Arc::new(PgChatMessageRepository::new(pool.clone())))
        .issue_repo(Arc::new(PgIssueRepository::new(pool.clone())))
        .proxy_link_repo(Arc::new(PgProxyLinkRepository::new(pool.clone())))
        .health_check(Arc::new(PgHealthCheck::new(pool.clone())))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the complete server with configuration until a shutdown signal arrives
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    let pool = connect_database(&config.database).await?;
    let state = create_app_state(config, &pool)?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(e))?;

    info!("HTTP server stopped; closing database pool");
    pool.close().await;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
