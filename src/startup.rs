//! Application Startup
//!
//! Application building and server initialization.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::services::TokenService;
use crate::config::{CorsSettings, Settings};
use crate::domain::{CommentRepository, PostRepository, UserRepository};
use crate::infrastructure::database::{self, PgStoreProbe, StoreProbe};
use crate::infrastructure::repositories::{
    PgCommentRepository, PgPostRepository, PgUserRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{create_cors_layer, SecurityHeadersConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub probe: Arc<dyn StoreProbe>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        probe: Arc<dyn StoreProbe>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            probe,
            tokens,
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: PgPool, tokens: TokenService) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgStoreProbe::new(pool)),
            Arc::new(tokens),
        )
    }
}

/// Router with the full middleware stack.
pub fn build_router(state: AppState, cors: &CorsSettings, environment: &str) -> Router {
    routes::create_router(state, SecurityHeadersConfig::for_environment(environment)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(create_cors_layer(cors)),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let pool = database::create_pool(&settings.database)
            .await
            .context("failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&pool)
                .await
                .context("failed to run migrations")?;
            tracing::info!("Database migrations applied");
        }

        let tokens = TokenService::from_settings(&settings.jwt);
        let state = AppState::from_pool(pool, tokens);
        let router = build_router(state, &settings.cors, &settings.environment);

        let addr = settings
            .server
            .socket_addr()
            .context("invalid server address")?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received, draining connections");
}
