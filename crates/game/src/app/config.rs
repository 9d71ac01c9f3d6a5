//! Host configuration, loaded from an optional JSON file.
//!
//! The file path comes from the `CHEATBOX_CONFIG` environment variable.
//! No variable or no file means defaults; a file that exists but does
//! not parse is a startup error, reported with its JSON path.

use std::fs;
use std::path::{Path, PathBuf};

use overlay::ViewportFraction;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub(crate) const CONFIG_ENV_VAR: &str = "CHEATBOX_CONFIG";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path} at {json_path}: {source}")]
    Parse {
        path: PathBuf,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct HostConfig {
    pub(crate) window_title: String,
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) max_render_fps: Option<u32>,
    pub(crate) panel_visible_at_start: bool,
    pub(crate) camera_viewport: CameraViewport,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            window_title: "Cheatbox Sandbox".to_string(),
            window_width: 1280,
            window_height: 720,
            max_render_fps: None,
            panel_visible_at_start: false,
            camera_viewport: CameraViewport::default(),
        }
    }
}

/// Normalized camera viewport fractions, mirrored into the overlay's
/// [`ViewportFraction`] at startup.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CameraViewport {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for CameraViewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl From<CameraViewport> for ViewportFraction {
    fn from(viewport: CameraViewport) -> Self {
        Self {
            x: viewport.x,
            y: viewport.y,
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// Resolves the config from the environment: defaults unless
/// `CHEATBOX_CONFIG` names a readable file.
pub(crate) fn load_config_from_env() -> Result<HostConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(raw_path) => {
            let path = PathBuf::from(raw_path);
            let config = load_config_file(&path)?;
            info!(path = %path.display(), "config_loaded");
            Ok(config)
        }
        None => {
            info!(env_var = CONFIG_ENV_VAR, "config_defaulted");
            Ok(HostConfig::default())
        }
    }
}

pub(crate) fn load_config_file(path: &Path) -> Result<HostConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&raw).map_err(|(json_path, source)| ConfigError::Parse {
        path: path.to_path_buf(),
        json_path,
        source,
    })
}

fn parse_config(raw: &str) -> Result<HostConfig, (String, serde_json::Error)> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, HostConfig>(&mut deserializer) {
        Ok(config) => Ok(config),
        Err(err) => {
            let json_path = err.path().to_string();
            Err((json_path, err.into_inner()))
        }
    }
}
