//! Core constants for POI loading and display.
//! Keeping them in a single place makes it easier to tweak engine-wide magic strings and delays.

use std::time::Duration;

/// Name given to a POI when the source record has none.
pub const UNNAMED_LOCATION: &str = "Unnamed Location";

/// Body text used when a POI carries no description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Appended to the details section when none of the recognised tags are present.
pub const NO_ADDITIONAL_DETAILS: &str = "No additional details available.";

/// Tags shown in the details section, in display order.
pub const RELEVANT_TAGS: [&str; 6] = [
    "description",
    "website",
    "phone",
    "opening_hours",
    "addr:street",
    "addr:housenumber",
];

/// Default Overpass interpreter endpoint.
pub const DEFAULT_OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Default search radius for dynamic POIs, in meters.
pub const DEFAULT_DYNAMIC_RADIUS_M: u32 = 1000;

/// Default category filter for dynamic queries.
pub const DEFAULT_CATEGORY: &str = "amenity";

/// How long the "no results" notice stays up.
pub const EMPTY_RESULT_DISMISS: Duration = Duration::from_secs(3);

/// How long a fetch error stays up.
pub const FETCH_ERROR_DISMISS: Duration = Duration::from_secs(5);

pub const LOADING_TEXT: &str = "Fetching nearby points of interest...";

pub const EMPTY_RESULT_TEXT: &str =
    "No points of interest found nearby. Try a different category or location.";

/// Request timeout for the shared HTTP client.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("arpoi/", env!("CARGO_PKG_VERSION"));

/// Marker sphere radius in scene units.
pub const MARKER_RADIUS: f32 = 0.5;

/// Marker fill colour.
pub const MARKER_COLOR: &str = "#4285f4";

pub const MARKER_OPACITY: f32 = 0.8;

/// Label offset above the marker (x, y, z).
pub const MARKER_LABEL_OFFSET: (f32, f32, f32) = (0.0, 1.0, 0.0);
