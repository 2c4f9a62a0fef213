pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use daily_core::{Clock, DailyEngine, SystemClock};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::SqliteStore;
use crate::error::{ApiError, Result};
use crate::services::push::{DisabledSender, FcmSender, PushSender};

/// Daily state engine over the SQLite store
pub type Engine = DailyEngine<SqliteStore>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<Engine>>,
    pub push: Arc<dyn PushSender>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        engine: Engine,
        push: Arc<dyn PushSender>,
        clock: Arc<dyn Clock>,
        config: Config,
    ) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            push,
            clock,
            config: Arc::new(config),
        }
    }

    /// Lock the engine. Never hold the guard across an `.await`.
    pub fn engine(&self) -> Result<MutexGuard<'_, Engine>> {
        self.engine
            .lock()
            .map_err(|_| ApiError::Internal("engine lock poisoned".to_string()))
    }
}

/// Build the full router
pub fn router(state: AppState) -> Router {
    let cron_routes = Router::new()
        .route("/api/cron", get(routes::notifications::cron))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::cron_auth,
        ));

    Router::new()
        .route("/health", get(health_check))
        // Daily message
        .route("/api/today", get(routes::today::today))
        // Catalog
        .route("/api/messages", get(routes::messages::list))
        .route("/api/messages/rewards", get(routes::messages::rewards))
        .route("/api/messages/{id}", get(routes::messages::get_one))
        // Rewards
        .route("/api/rewards", get(routes::rewards::unredeemed))
        .route("/api/rewards/claimed", get(routes::rewards::claimed))
        .route("/api/rewards/{id}/claim", post(routes::rewards::claim))
        .route("/api/rewards/{id}/redeem", post(routes::rewards::redeem))
        // Persisted state
        .route(
            "/api/state",
            get(routes::state::get_state).delete(routes::state::reset),
        )
        // Notifications
        .route(
            "/api/notifications/token",
            post(routes::notifications::register_token),
        )
        .route(
            "/api/send-notification",
            post(routes::notifications::send),
        )
        .merge(cron_routes)
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Opening database at {}...", config.database_path.display());
    let store = SqliteStore::open(&config.database_path)?;
    let engine = DailyEngine::with_store(store).with_daily_reset_hour(config.daily_reset_hour);

    let push: Arc<dyn PushSender> = match config.fcm.clone() {
        Some(fcm) => {
            tracing::info!("Push notifications via FCM project {}", fcm.project_id);
            Arc::new(FcmSender::new(fcm))
        }
        None => {
            tracing::warn!("FCM not configured, notifications disabled");
            Arc::new(DisabledSender)
        }
    };

    if config.cron_secret.is_none() {
        tracing::warn!("CRON_SECRET not set, /api/cron will reject every request");
    }

    let addr = config.addr();
    let state = AppState::new(engine, push, Arc::new(SystemClock), config);

    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
