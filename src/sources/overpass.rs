//! Dynamic POIs from an Overpass interpreter
//!
//! One radius query per fetch, selecting OSM nodes that carry the configured
//! category tag around the user's position. The response is decoded into
//! transport DTOs first and then normalised into [`Poi`] records in one pass.

use super::{
    transport::{ReqwestTransport, Transport},
    PoiSource, SourceQuery,
};
use crate::{
    core::{
        config::ArConfig,
        constants::{DEFAULT_OVERPASS_ENDPOINT, UNNAMED_LOCATION},
        geo::Coordinates,
    },
    poi::place::{Poi, Tags},
    Error, Result,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct OverpassResponseDto {
    #[serde(default)]
    elements: Vec<OverpassElementDto>,
}

#[derive(Debug, Deserialize)]
struct OverpassElementDto {
    #[serde(default)]
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: Tags,
}

impl OverpassElementDto {
    fn into_poi(self, category: &str) -> Option<Poi> {
        let (Some(latitude), Some(longitude)) = (self.lat, self.lon) else {
            log::debug!("skipping element {} without coordinates", self.id);
            return None;
        };

        let name = non_empty(self.tags.get("name"))
            .unwrap_or(UNNAMED_LOCATION)
            .to_string();
        let description = non_empty(self.tags.get("description"))
            .map(str::to_string)
            .unwrap_or_else(|| fallback_description(category));

        Some(Poi {
            name,
            latitude,
            longitude,
            description: Some(description),
            tags: Some(self.tags),
        })
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Description synthesised from the category filter, e.g. `amenity=cafe` -> `A amenity: cafe location`.
pub fn fallback_description(category: &str) -> String {
    format!("A {} location", category.replacen('=', ": ", 1))
}

/// Overpass tag selector for a `key` or `key=value` filter.
pub fn tag_selector(category: &str) -> String {
    let quote = |s: &str| s.trim().replace('"', "\\\"");
    match category.split_once('=') {
        Some((key, value)) => format!("[\"{}\"=\"{}\"]", quote(key), quote(value)),
        None => format!("[\"{}\"]", quote(category)),
    }
}

/// Overpass QL for point features matching `category` within `radius_m` of `center`.
pub fn build_query(category: &str, radius_m: u32, center: Coordinates) -> String {
    format!(
        "[out:json];node{}(around:{},{},{});out;",
        tag_selector(category),
        radius_m,
        center.latitude,
        center.longitude
    )
}

/// Radius query against an Overpass-compatible provider.
#[derive(Clone)]
pub struct DynamicSource {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl DynamicSource {
    pub fn new(endpoint: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport: Arc::new(transport),
        }
    }

    /// Source hitting the public Overpass instance over HTTP.
    pub fn openstreetmap() -> Self {
        Self::new(DEFAULT_OVERPASS_ENDPOINT, ReqwestTransport)
    }

    pub fn from_config(config: &ArConfig) -> Self {
        Self::new(config.endpoint.clone(), ReqwestTransport)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL with the query URL-encoded into the `data` parameter.
    pub fn request_url(&self, category: &str, radius_m: u32, center: Coordinates) -> Result<String> {
        let query = build_query(category, radius_m, center);
        let url = reqwest::Url::parse_with_params(&self.endpoint, &[("data", query.as_str())])
            .map_err(|e| Error::Config(format!("invalid endpoint {}: {}", self.endpoint, e)))?;
        Ok(url.to_string())
    }

    /// Decode a provider body into POIs.
    pub fn parse_elements(body: &str, category: &str) -> Result<Vec<Poi>> {
        let response: OverpassResponseDto = serde_json::from_str(body)?;
        Ok(response
            .elements
            .into_iter()
            .filter_map(|el| el.into_poi(category))
            .collect())
    }
}

impl std::fmt::Debug for DynamicSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicSource")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PoiSource for DynamicSource {
    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<Poi>> {
        let center = query.coordinates.ok_or(Error::MissingCoordinates)?;
        let url = self.request_url(&query.category, query.radius_m, center)?;
        log::debug!("querying {} around {} ({} m)", query.category, center, query.radius_m);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(Error::Fetch {
                status: Some(response.status),
                reason: format!(
                    "Failed to fetch POIs from OpenStreetMap (HTTP {})",
                    response.status
                ),
            });
        }

        let pois = Self::parse_elements(&response.body, &query.category)?;
        log::info!("fetched {} POIs for {}", pois.len(), query.category);
        Ok(pois)
    }
}
