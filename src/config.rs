//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/tintpad/config.yaml`

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::model::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// Settings for the color picker tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Delay between pixel reads
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Horizontal distance from the cursor to the tooltip
    #[serde(default = "default_offset")]
    pub offset_x: i32,
    /// Vertical distance from the cursor to the tooltip
    #[serde(default = "default_offset")]
    pub offset_y: i32,
}

fn default_poll_interval_ms() -> u64 {
    40
}

fn default_offset() -> i32 {
    16
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            offset_x: default_offset(),
            offset_y: default_offset(),
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Background for new documents and for files that don't specify one
    #[serde(default = "default_background")]
    pub default_background: Color,
    /// Text color where no span applies
    #[serde(default = "default_foreground")]
    pub default_foreground: Color,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    #[serde(default = "default_word_wrap")]
    pub word_wrap: bool,
    #[serde(default)]
    pub picker: PickerConfig,
}

fn default_background() -> Color {
    DEFAULT_BACKGROUND
}

fn default_foreground() -> Color {
    DEFAULT_FOREGROUND
}

fn default_font_family() -> String {
    "Consolas".to_string()
}

fn default_font_size() -> u16 {
    12
}

fn default_word_wrap() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_background: default_background(),
            default_foreground: default_foreground(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            word_wrap: default_word_wrap(),
            picker: PickerConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML; absent keys take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
