use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub deck: DeckConfig,
    pub transition: TransitionConfig,
    pub assets: AssetConfig,
    pub font: FontConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Native window configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub fullscreen: bool,
}

/// What to show when the active path matches neither a slide nor a project page
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedRoute {
    /// Render nothing
    #[default]
    Empty,
    /// Render a small "no slide here" view
    NotFound,
    /// Replace the location with the first slide
    FirstSlide,
}

/// Deck behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DeckConfig {
    /// Path opened on startup, e.g. "/" or "/projects/microimpute"
    pub start_route: String,
    pub unmatched: UnmatchedRoute,
    /// Show the arrow key hint under the navigation bar
    pub show_key_hint: bool,
}

/// Slide transition timing (in milliseconds)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TransitionConfig {
    pub enter_ms: u64,
    pub exit_ms: u64,
}

/// Where slide images are looked up
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AssetConfig {
    /// Relative paths are resolved against the working directory
    pub image_dir: PathBuf,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FontConfig {
    /// Size of body text (in points)
    pub body_size: f32,
    /// Size of slide headings (in points)
    pub heading_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1280.0,
            height: 800.0,
            fullscreen: false,
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            start_route: "/".to_string(),
            unmatched: UnmatchedRoute::Empty,
            show_key_hint: true,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig {
            enter_ms: 500,
            exit_ms: 300,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            image_dir: PathBuf::from("images"),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            body_size: 16.0,
            heading_size: 40.0,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "recap")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::debug!("no config directory on this platform, using defaults");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_err = |source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(write_err)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
                log::info!("wrote default config to {}", path.display());
            }
        }
        Ok(())
    }

    /// Image directory resolved against the working directory
    pub fn image_dir(&self) -> PathBuf {
        if self.assets.image_dir.is_absolute() {
            self.assets.image_dir.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_default()
                .join(&self.assets.image_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.deck.start_route, "/");
        assert_eq!(config.deck.unmatched, UnmatchedRoute::Empty);
        assert_eq!(config.transition.enter_ms, 500);
        assert_eq!(config.transition.exit_ms, 300);
        assert!(config.deck.show_key_hint);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.deck.unmatched, deserialized.deck.unmatched);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [deck]
            unmatched = "first_slide"
            "#,
        )
        .expect("Failed to parse");
        assert_eq!(config.deck.unmatched, UnmatchedRoute::FirstSlide);
        assert_eq!(config.deck.start_route, "/");
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = std::env::temp_dir().join(format!("recap-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "[deck\nstart_route = ").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("recap-save-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = Config::default();
        config.theme.mode = "light".to_string();
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme.mode, "light");
        fs::remove_dir_all(&dir).unwrap();
    }
}
