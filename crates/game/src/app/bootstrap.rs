use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::{self, ConfigError, HostConfig};

pub(crate) fn build_app() -> Result<HostConfig, ConfigError> {
    init_tracing();
    info!("=== Cheatbox Sandbox Startup ===");

    config::load_config_from_env()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
