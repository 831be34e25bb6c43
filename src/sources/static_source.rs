use super::{PoiSource, SourceQuery};
use crate::{poi::place::Poi, Result};
use async_trait::async_trait;

/// Serves the configured POI list verbatim.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pois: Vec<Poi>,
}

impl StaticSource {
    pub fn new(pois: Vec<Poi>) -> Self {
        Self { pois }
    }

    /// Synchronous access used by the controller; this path cannot fail.
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }
}

#[async_trait]
impl PoiSource for StaticSource {
    async fn fetch(&self, _query: &SourceQuery) -> Result<Vec<Poi>> {
        Ok(self.pois.clone())
    }
}
