//! INI config file loading and saving.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;

use super::error::ConfigError;
use super::{token_from_lookup, AccessToken, ImageryConfig, DEFAULT_BASE_URL};
use crate::walker::PositionState;

const MAPILLARY_SECTION: &str = "mapillary";
const WALKER_SECTION: &str = "walker";

/// Default location of the config file (`<config dir>/streetwalk/config.ini`).
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("streetwalk")
        .join("config.ini")
}

/// `[mapillary]` section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapillarySettings {
    pub access_token: Option<String>,
    pub base_url: Option<String>,
}

/// `[walker]` section: where a new walker starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalkerSettings {
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub start_bearing: Option<f64>,
}

/// Parsed contents of `config.ini`. Unset keys fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    pub mapillary: MapillarySettings,
    pub walker: WalkerSettings,
}

impl ConfigFile {
    /// Load from the default path, or defaults if the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from a specific path, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mapillary = MapillarySettings {
            access_token: get_string(&ini, MAPILLARY_SECTION, "access_token"),
            base_url: get_string(&ini, MAPILLARY_SECTION, "base_url"),
        };

        let walker = WalkerSettings {
            start_lat: get_parsed(&ini, WALKER_SECTION, "start_lat")?,
            start_lng: get_parsed(&ini, WALKER_SECTION, "start_lng")?,
            start_bearing: get_parsed(&ini, WALKER_SECTION, "start_bearing")?,
        };

        Ok(Self { mapillary, walker })
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to a specific path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut ini = Ini::new();
        {
            let mut section = ini.with_section(Some(MAPILLARY_SECTION));
            if let Some(token) = &self.mapillary.access_token {
                section.set("access_token", token.as_str());
            }
            if let Some(url) = &self.mapillary.base_url {
                section.set("base_url", url.as_str());
            }
        }
        {
            let mut section = ini.with_section(Some(WALKER_SECTION));
            if let Some(lat) = self.walker.start_lat {
                section.set("start_lat", lat.to_string());
            }
            if let Some(lng) = self.walker.start_lng {
                section.set("start_lng", lng.to_string());
            }
            if let Some(bearing) = self.walker.start_bearing {
                section.set("start_bearing", bearing.to_string());
            }
        }

        ini.write_to_file(path).map_err(write_err)
    }

    /// Resolve the imagery client settings.
    ///
    /// Environment variables from `lookup` take precedence over the file.
    pub fn imagery_config<F>(&self, lookup: F) -> ImageryConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = token_from_lookup(&lookup)
            .or_else(|| self.mapillary.access_token.clone())
            .unwrap_or_default();

        let base_url = self
            .mapillary
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        ImageryConfig {
            access_token: AccessToken::new(token),
            base_url,
        }
    }

    /// Starting walker state: configured values over the built-in default.
    pub fn start_state(&self) -> PositionState {
        let default = PositionState::default();
        PositionState::new(
            self.walker.start_lat.unwrap_or(default.lat),
            self.walker.start_lng.unwrap_or(default.lng),
            self.walker.start_bearing.unwrap_or(default.bearing),
        )
    }
}

fn get_string(ini: &Ini, section: &str, key: &str) -> Option<String> {
    ini.section(Some(section))
        .and_then(|s| s.get(key))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn get_parsed<T: FromStr>(ini: &Ini, section: &str, key: &str) -> Result<Option<T>, ConfigError> {
    match get_string(ini, section, key) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: format!("{}.{}", section, key),
                value,
            }),
        None => Ok(None),
    }
}
