use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::errors::ReplayError;
use crate::replay::SurfaceConfig;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub replay_window_position: WindowPosition,
    pub show_labels: bool,
    pub surface: SurfaceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            replay_window_position: WindowPosition::default(),
            show_labels: true,
            surface: SurfaceConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_local_file() -> Option<Self> {
        let config_path = dirs::config_dir()?.join("slipstream").join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let file = std::fs::File::open(config_path).ok()?;
            serde_json::from_reader(file).ok()
        } else {
            None
        }
    }

    pub fn save(&self) -> Result<(), ReplayError> {
        let config_path = dirs::config_dir()
            .ok_or(ReplayError::NoConfigDir)?
            .join("slipstream")
            .join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            std::fs::create_dir_all(config_path.parent().unwrap())
                .map_err(|e| ReplayError::ConfigIoError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| ReplayError::ConfigIoError { source: e })?;
        serde_json::to_writer(file, self)
            .map_err(|e| ReplayError::ConfigSerializeError { source: e })
    }
}
