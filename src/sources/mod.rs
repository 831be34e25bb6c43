//! POI source strategies
//!
//! A source turns a [`SourceQuery`] into a finite list of POIs. Each call is
//! an independent fetch; call again to re-fetch.

pub mod overpass;
pub mod static_source;
pub mod transport;

use crate::{core::geo::Coordinates, poi::place::Poi, Result};
use async_trait::async_trait;

/// Parameters for one fetch. Static sources ignore them.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceQuery {
    /// User position; required by dynamic sources
    pub coordinates: Option<Coordinates>,
    /// Category filter, `key` or `key=value`
    pub category: String,
    pub radius_m: u32,
}

/// Trait representing anything that can produce a POI set.
#[async_trait]
pub trait PoiSource: Send + Sync {
    /// Fetch the POIs for `query`. An empty list is a valid outcome, distinct from an error.
    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<Poi>>;
}
