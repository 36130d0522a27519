//! Aqua Desk configuration system
//!
//! This crate provides centralized configuration management for the desktop
//! shell, loading settings from `aqua.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Aqua Desk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeskConfig {
    /// Shell window settings
    pub shell: ShellConfig,
    /// Defaults applied to newly created desktop windows
    pub window: WindowConfig,
    /// Responsive layout constants
    pub layout: LayoutConfig,
    /// Stacking order bounds
    pub zorder: ZOrderConfig,
}

/// Shell window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Title of the native window hosting the desktop
    pub title: String,
}

/// Per-window defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Default width for windows created without an explicit size
    pub default_width: f32,
    /// Default height for windows created without an explicit size
    pub default_height: f32,
    /// Header (title bar) height; also the collapsed height when minimized
    pub header_height: f32,
}

/// Responsive layout constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum side length for fixed-square windows
    pub square_min: f32,
    /// Preferred side length for fixed-square windows
    pub square_target: f32,
    /// Fraction of the viewport aspect-ratio windows may occupy per axis
    pub viewport_fraction: f32,
    /// Container width at or below which the narrow/mobile policies apply
    pub mobile_breakpoint: f32,
}

/// Stacking order bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZOrderConfig {
    /// Baseline z assigned below every live window
    pub floor: i32,
    /// Minimum z of the reserved overlay; windows stay strictly below it
    pub overlay: i32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Aqua Desk".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            default_height: 300.0,
            header_height: 32.0,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            square_min: 230.0,
            square_target: 300.0,
            viewport_fraction: 0.9,
            mobile_breakpoint: 768.0,
        }
    }
}

impl Default for ZOrderConfig {
    fn default() -> Self {
        Self {
            floor: 1000,
            overlay: 9998,
        }
    }
}

impl DeskConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the aqua.toml configuration file
    ///
    /// # Returns
    /// * `Ok(DeskConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (aqua.toml in the current
    /// directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("aqua.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(title) = std::env::var("AQUA_TITLE") {
            self.shell.title = title;
        }
        if let Ok(val) = std::env::var("AQUA_HEADER_HEIGHT") {
            if let Ok(h) = val.parse::<f32>() {
                self.window.header_height = h;
            }
        }
        if let Ok(val) = std::env::var("AQUA_MOBILE_BREAKPOINT") {
            if let Ok(bp) = val.parse::<f32>() {
                self.layout.mobile_breakpoint = bp;
            }
        }
        if let Ok(val) = std::env::var("AQUA_VIEWPORT_FRACTION") {
            if let Ok(f) = val.parse::<f32>() {
                self.layout.viewport_fraction = f;
            }
        }
        if let Ok(val) = std::env::var("AQUA_Z_FLOOR") {
            if let Ok(z) = val.parse::<i32>() {
                self.zorder.floor = z;
            }
        }
        if let Ok(val) = std::env::var("AQUA_Z_OVERLAY") {
            if let Ok(z) = val.parse::<i32>() {
                self.zorder.overlay = z;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from aqua.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
