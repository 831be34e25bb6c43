use crate::core::{constants::UNNAMED_LOCATION, geo::Coordinates};
use crate::prelude::HashMap;
use serde::{Deserialize, Serialize};

/// Raw attribute mapping attached to externally sourced POIs.
pub type Tags = HashMap<String, String>;

/// A geolocated point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    #[serde(default = "unnamed")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present only for POIs from the geospatial provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

fn unnamed() -> String {
    UNNAMED_LOCATION.to_string()
}

impl Poi {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            description: None,
            tags: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Look up a tag value; absent when the POI has no tag set.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }
}
