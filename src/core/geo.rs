use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A WGS84 position in degrees.
///
/// No range validation is performed: out-of-range values pass through to the
/// query provider and renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"<latitude>,<longitude>"`.
impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Config(format!("invalid coordinates {:?}", s));
        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lng.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self::new(latitude, longitude))
    }
}
