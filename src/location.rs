//! One-shot user location lookup
//!
//! The position is resolved once per session. A failure here is terminal for
//! dynamic mode: there is no retry path.

use crate::{core::geo::Coordinates, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Options passed to the platform location capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOptions {
    pub high_accuracy: bool,
    pub timeout: Option<Duration>,
    pub maximum_age: Option<Duration>,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: None,
            maximum_age: None,
        }
    }
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the user's position once.
    ///
    /// Fails with [`Error::Location`] on denial and
    /// [`Error::LocationUnsupported`] when the capability is absent.
    async fn resolve(&self, options: &LocationOptions) -> Result<Coordinates>;
}

/// Provider that always answers with a configured position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn resolve(&self, _options: &LocationOptions) -> Result<Coordinates> {
        Ok(self.0)
    }
}

/// Provider for platforms without a location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocation;

#[async_trait]
impl LocationProvider for UnsupportedLocation {
    async fn resolve(&self, _options: &LocationOptions) -> Result<Coordinates> {
        Err(Error::LocationUnsupported)
    }
}
