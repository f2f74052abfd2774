//! Tracing initialization
//!
//! Handlers annotate their spans with query type, paging values, row counts,
//! and error text. Those annotations are advisory: with no subscriber
//! installed (as in tests) they are no-ops and never affect control flow or
//! response content.

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize JSON-formatted tracing with a level filter from config
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = config.service.log_level.clone();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}
