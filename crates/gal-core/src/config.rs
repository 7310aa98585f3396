// ABOUTME: Application and layout configuration handling.
// ABOUTME: Loads and saves settings from TOML, validates layout parameters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MAX_HEIGHT: f64 = 400.0;
pub const DEFAULT_SPACING: f64 = 10.0;

/// Available row layout strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Greedy rows scaled to fill the container width
    #[default]
    Justified,
}

impl LayoutKind {
    pub fn label(&self) -> &'static str {
        match self {
            LayoutKind::Justified => "justified",
        }
    }
}

/// Layout tuning options as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub kind: LayoutKind,

    /// Target row height in pixels before corrective scaling
    pub max_height: f64,

    /// Pixel gap between photos and between rows
    pub spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            kind: LayoutKind::default(),
            max_height: DEFAULT_MAX_HEIGHT,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl LayoutOptions {
    /// Combine the options with a measured container width
    pub fn resolve(&self, container_width: f64) -> Result<LayoutConfig, ConfigError> {
        LayoutConfig::new(self.max_height, self.spacing, container_width)
    }
}

/// Validated, immutable parameters for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    max_row_height: f64,
    spacing: f64,
    container_width: f64,
}

impl LayoutConfig {
    pub fn new(max_row_height: f64, spacing: f64, container_width: f64) -> Result<Self, ConfigError> {
        ensure_positive("max_row_height", max_row_height)?;
        ensure_positive("container_width", container_width)?;
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(spacing));
        }

        Ok(Self {
            max_row_height,
            spacing,
            container_width,
        })
    }

    pub fn max_row_height(&self) -> f64 {
        self.max_row_height
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Container width the gallery is laid out for
    pub container_width: f64,

    /// Id of the element that hosts the gallery
    pub root_id: String,

    /// Catalog file with album and photo metadata
    pub catalog: Option<PathBuf>,

    /// Row layout settings
    pub layout: LayoutOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_width: 1200.0,
            root_id: "gallery".to_string(),
            catalog: None,
            layout: LayoutOptions::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("spacing must be a non-negative number, got {0}")]
    NegativeSpacing(f64),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Get the default config file path (~/.config/justified-gallery/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("justified-gallery").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
