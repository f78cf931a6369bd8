//! ConfigStore - Window Placement Persistence
//!
//! The window position and size persist across runs in a TOML file under the
//! platform config directory. The page language deliberately does not.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Persisted window placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowState {
    pub placement: Option<WindowPlacement>,
}

fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("io", "FlashMint", "flashmint-gui").ok_or_else(|| {
        Error::Invalid {
            message: "could not determine config directory".to_string(),
        }
    })?;
    let dir = dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.join("flashmint-gui.toml"))
}

impl WindowState {
    /// Load state from the config file, falling back to defaults
    pub fn try_load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading window state");
        let value = fs::read_to_string(&path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&value)?)
    }

    /// Save state to the config file
    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        let value = toml::to_string(self)?;
        fs::write(path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_state_roundtrip() {
        let state = WindowState {
            placement: Some(WindowPlacement {
                x: 40.0,
                y: 60.0,
                width: 1200.0,
                height: 800.0,
            }),
        };
        let encoded = toml::to_string(&state).expect("serialize window state");
        let decoded: WindowState = toml::from_str(&encoded).expect("parse window state");
        assert_eq!(decoded.placement, state.placement);
    }

    #[test]
    fn test_window_state_tolerates_empty_file() {
        let decoded: WindowState = toml::from_str("").expect("parse empty window state");
        assert!(decoded.placement.is_none());
    }
}
