//! Billed web server
//!
//! Server-rendered expense reports: employees list their bills and submit
//! new ones with a receipt, admins get a read-only dashboard.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{HttpBillStore, InMemoryBillStore};
use app::Route;
use config::Config;
use domain::ports::BillStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BillStore>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST handler for the new bill form, rate limited when configured
fn submit_route(config: &Config) -> anyhow::Result<MethodRouter<AppState>> {
    let submit = post(handlers::submit_new_bill);

    let Some(rate) = config.submit_rate else {
        return Ok(submit);
    };

    // PeerIpKeyExtractor needs the socket address, see `into_make_service_with_connect_info`
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(rate.per_second)
            .burst_size(rate.burst)
            .finish()
            .context("Failed to build governor config")?,
    );

    Ok(submit.layer(GovernorLayer {
        config: governor_config,
    }))
}

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let employee_routes = Router::new()
        .route(Route::Bills.path(), get(handlers::bills_page))
        .route("/employee/bills/receipt", get(handlers::receipt_modal))
        .route(
            Route::NewBill.path(),
            get(handlers::new_bill_page).merge(submit_route(&state.config)?),
        )
        .route(Route::Dashboard.path(), get(handlers::dashboard_page))
        .layer(middleware::from_fn(auth::session_middleware));

    Ok(Router::new()
        // Health check (no session)
        .route("/health", get(health))
        .route(Route::Login.path(), get(handlers::root))
        .merge(employee_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn build_store(config: &Config) -> Arc<dyn BillStore> {
    match &config.api_url {
        Some(url) => {
            tracing::info!(api_url = %url, "Using bills backend");
            Arc::new(HttpBillStore::new(url, None))
        }
        None if config.seed_demo => {
            tracing::info!("No backend configured, using in-memory store with demo bills");
            Arc::new(InMemoryBillStore::demo())
        }
        None => {
            tracing::info!("No backend configured, using empty in-memory store");
            Arc::new(InMemoryBillStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,billed_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Billed...");

    // Load configuration
    let config = Config::from_env();

    let state = AppState {
        store: build_store(&config),
        config: config.clone(),
    };

    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
