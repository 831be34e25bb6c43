//! Configuration for POI loading
//!
//! This module provides the configuration surface of the engine: the static
//! POI list, the initial mode and the knobs used by dynamic queries. Configs
//! can be built in code, from presets, or deserialized from JSON.

use crate::{
    core::constants::{DEFAULT_CATEGORY, DEFAULT_DYNAMIC_RADIUS_M, DEFAULT_OVERPASS_ENDPOINT},
    poi::place::Poi,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

/// Where the active POI set comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Static,
    Dynamic,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Static => Self::Dynamic,
            Self::Dynamic => Self::Static,
        }
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Static => "Switch to Dynamic POIs",
            Self::Dynamic => "Switch to Static POIs",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Static => write!(f, "static"),
            Mode::Dynamic => write!(f, "dynamic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArConfig {
    /// Mode the controller starts in
    pub mode: Mode,
    /// Search radius for dynamic POIs, in meters
    pub dynamic_radius_m: u32,
    /// Category filter for dynamic queries, `key` or `key=value`
    pub category: String,
    /// Overpass interpreter endpoint
    pub endpoint: String,
    pub static_pois: Vec<Poi>,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Static,
            dynamic_radius_m: DEFAULT_DYNAMIC_RADIUS_M,
            category: DEFAULT_CATEGORY.to_string(),
            endpoint: DEFAULT_OVERPASS_ENDPOINT.to_string(),
            static_pois: rochester_pois(),
        }
    }
}

impl ArConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dynamic_radius_m == 0 {
            return Err(Error::Config("dynamic_radius_m must be positive".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Config("category must not be empty".to_string()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.dynamic_radius_m = radius_m;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_static_pois(mut self, pois: Vec<Poi>) -> Self {
        self.static_pois = pois;
        self
    }
}

/// The bundled example list: three landmarks in downtown Rochester, NY.
pub fn rochester_pois() -> Vec<Poi> {
    vec![
        Poi::new("Rochester Abandoned Subway", 43.154722, -77.609722).with_description(
            "The Rochester Subway was a light rail rapid transit line in Rochester, New York, from 1927 to 1956.",
        ),
        Poi::new("Washington Square Park", 43.1534, -77.6053).with_description(
            "A historic park in downtown Rochester, featuring monuments and green space.",
        ),
        Poi::new("Rochester Contemporary Art Center", 43.156619, -77.600730).with_description(
            "A venue for the creation, experimentation and presentation of contemporary art.",
        ),
    ]
}
