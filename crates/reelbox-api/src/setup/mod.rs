//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use reelbox_core::Config;
use reelbox_db::{PgVideoStore, VideoStore};
use reelbox_storage::AssetStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup asset storage
    let assets = AssetStore::new(&config.assets_root, config.asset_base_url())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize asset store: {}", e))?;

    let videos: Arc<dyn VideoStore> = Arc::new(PgVideoStore::new(pool));

    let state = Arc::new(AppState {
        videos,
        assets,
        config: config.clone(),
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
