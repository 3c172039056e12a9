use daisywheel::{
    ContainerGeometry, FillDirection, FillOrigin, ItemGraphic, ItemSlot, RadialFill, Vec2,
    WheelConfig,
};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Plain,
    #[strum(serialize = "radial", serialize = "radial360")]
    Radial,
}

/// Graphic of an item or of the cursor. No `fill` means no graphic at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GraphicConfig {
    pub fill: Option<FillKind>,
    pub direction: Option<FillDirection>,
    pub origin: Option<FillOrigin>,
}

impl GraphicConfig {
    pub fn to_graphic(&self) -> Option<ItemGraphic> {
        self.fill.map(|kind| match kind {
            FillKind::Plain => ItemGraphic::Plain,
            FillKind::Radial => ItemGraphic::Radial(RadialFill::new(
                self.direction.unwrap_or_default(),
                self.origin.unwrap_or_default(),
            )),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: Option<String>,
    pub fill: Option<FillKind>,
    pub direction: Option<FillDirection>,
    pub origin: Option<FillOrigin>,
}

impl ItemConfig {
    pub fn to_slot(&self) -> ItemSlot {
        let graphic = GraphicConfig {
            fill: self.fill,
            direction: self.direction,
            origin: self.origin,
        };
        ItemSlot {
            graphic: graphic.to_graphic(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub canvas_size: Vec2,
    pub content_size: Vec2,
    pub content_center: Vec2,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(1920.0, 1080.0),
            content_size: Vec2::new(400.0, 400.0),
            content_center: Vec2::new(960.0, 540.0),
        }
    }
}

impl From<GeometryConfig> for ContainerGeometry {
    fn from(cfg: GeometryConfig) -> Self {
        ContainerGeometry::new(cfg.canvas_size, cfg.content_size, cfg.content_center)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub cursor: Option<GraphicConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl AppConfig {
    pub fn slots(&self) -> Vec<ItemSlot> {
        self.items.iter().map(ItemConfig::to_slot).collect()
    }

    pub fn labels(&self) -> Vec<Option<String>> {
        self.items.iter().map(|item| item.label.clone()).collect()
    }

    pub fn cursor_graphic(&self) -> Option<ItemGraphic> {
        self.cursor.as_ref().and_then(GraphicConfig::to_graphic)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "daisywheel", "daisy").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

fn deserialize_with_env(
    source: impl config::Source + Send + Sync + 'static,
) -> Result<AppConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(source)
        .add_source(
            config::Environment::with_prefix("DAISY")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    deserialize_with_env(config::File::from(path).required(false))
}

pub fn bundled_config() -> Result<AppConfig, ConfigError> {
    deserialize_with_env(config::File::from_str(
        DEFAULT_CONFIG,
        config::FileFormat::Toml,
    ))
}

/// The file at `path` if it exists and parses, otherwise the bundled default.
pub fn load_or_default(path: &Path) -> AppConfig {
    if path.exists() {
        match load_config(path) {
            Ok(c) => return c,
            Err(e) => log::error!("Failed to load {}: {}", path.display(), e),
        }
    }

    bundled_config().unwrap_or_else(|e| {
        log::error!("Bundled config is invalid: {}", e);
        AppConfig::default()
    })
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
