//! # arpoi
//!
//! Point-of-interest lifecycle engine for location-based AR scenes.
//!
//! The crate resolves a set of POIs either from a static configuration list
//! or from a live Overpass radius query around the user's position, turns
//! each POI into a rendered anchor with a selection hook, and keeps track of
//! the active set so it can be torn down and rebuilt on mode switches and
//! refreshes. Rendering and display are left to collaborators behind the
//! [`AnchorFactory`] and [`DisplaySink`] traits.

pub mod controller;
pub mod core;
pub mod layers;
pub mod location;
pub mod poi;
pub mod prelude;
pub mod sources;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{ArConfig, Mode},
    geo::Coordinates,
    state::AppState,
};

pub use poi::{
    formatter::{DisplayPayload, PlaceFormatter},
    place::Poi,
};

pub use sources::{
    overpass::DynamicSource,
    static_source::StaticSource,
    transport::{ReqwestTransport, Transport, TransportResponse},
    PoiSource, SourceQuery,
};

pub use layers::{
    anchor::{AnchorFactory, SelectCallback, SelectHook},
    marker::Marker,
    registry::{PoiRegistry, ReplaceOutcome},
    scene::{Scene, SceneAnchorFactory},
};

pub use controller::{
    mode::{LoadOutcome, LoadTicket, ModeController},
    status::{StatusKind, StatusMessage},
};

pub use location::{FixedLocation, LocationOptions, LocationProvider, UnsupportedLocation};

pub use ui::display::{ChannelDisplay, DisplayEvent, DisplaySink};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PoiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Location(String),

    #[error("Geolocation is not supported on this platform.")]
    LocationUnsupported,

    #[error("User location not available")]
    MissingCoordinates,

    #[error("User location has already been resolved")]
    CoordinatesAlreadySet,

    #[error("Dynamic load requested outside dynamic mode")]
    NotDynamic,

    #[error("{reason}")]
    Fetch { status: Option<u16>, reason: String },

    #[error("Anchor error: {0}")]
    Anchor(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PoiError {
    /// Errors a dynamic load can recover from by refreshing.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Network(_) | Self::Serialization(_)
        )
    }

    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            Self::Location(_) | Self::LocationUnsupported | Self::MissingCoordinates
        )
    }

    /// Transport status carried by a fetch failure, if the provider answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error type alias for convenience
pub type Error = PoiError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let fetch = Error::Fetch {
            status: Some(500),
            reason: "Failed to fetch POIs from OpenStreetMap".to_string(),
        };
        assert!(fetch.is_fetch_error());
        assert!(!fetch.is_location_error());
        assert_eq!(fetch.status(), Some(500));
        assert_eq!(fetch.to_string(), "Failed to fetch POIs from OpenStreetMap");

        assert!(Error::LocationUnsupported.is_location_error());
        assert!(Error::MissingCoordinates.is_location_error());
        assert_eq!(Error::MissingCoordinates.status(), None);
        assert!(!Error::NotDynamic.is_fetch_error());
        assert!(!Error::NotDynamic.is_location_error());
    }
}
